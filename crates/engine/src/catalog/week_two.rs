//! Week 2: routines and first connections.

use landfall_domain::{
    Mission, MissionResource as Resource, MissionStep as Step, Mood, MoodContent, Pillar,
    ResourceType, WeekNumber,
};

const WEEK: WeekNumber = WeekNumber::TWO;

pub(super) fn missions() -> Vec<Mission> {
    vec![
        Mission::new("w2-library-card", "Get a library card", Pillar::City, WEEK)
            .with_tags(&["city", "growth", "budget"])
            .with_duration("45 min")
            .with_xp(50)
            .with_objective("Get free access to books, wifi, events and a quiet desk.")
            .with_content(
                MoodContent::new(
                    "The most underrated free membership in any city.",
                    "Libraries run classes, clubs and talks most people never hear about.",
                    "A card in your wallet and one event on your calendar.",
                )
                .with_steps(vec![
                    Step::new(1, "Find your branch", "Look up the closest library and its opening hours."),
                    Step::new(2, "Bring proof of address", "A tenancy agreement or a utility bill usually works.")
                        .with_tip("Some libraries accept a bank letter sent to your new address."),
                    Step::new(3, "Check the events board", "Pick one free event this month."),
                ])
                .with_resources(vec![
                    Resource::new(ResourceType::Place, "Central library", "Usually the largest events programme."),
                    Resource::new(ResourceType::App, "Library app", "Borrow e-books and audiobooks for free."),
                ]),
            ),
        Mission::new("w2-find-your-cafe", "Find your third place", Pillar::City, WEEK)
            .with_tags(&["city", "social"])
            .with_duration("1 hr")
            .with_xp(50)
            .with_objective("Have a spot that isn't home or work where you can just be.")
            .with_content(
                MoodContent::new(
                    "Every local has a spot. Time to pick yours.",
                    "Being a regular somewhere is the fastest way to feel known.",
                    "A place where the staff start to recognise you.",
                )
                .with_steps(vec![
                    Step::new(1, "Shortlist three", "Cafés, parks, bookshops within a short walk."),
                    Step::new(2, "Try each once", "Stay at least thirty minutes. Notice how it feels."),
                    Step::new(3, "Pick a winner and go back", "Same place, twice this week."),
                ]),
            )
            .with_mood_content(
                Mood::Lonely,
                MoodContent::new(
                    "Find somewhere with people around, even if you don't talk to them.",
                    "Being among people helps even before you know any of them.",
                    "An hour somewhere warm and busy.",
                )
                .with_steps(vec![
                    Step::new(1, "Pick the busiest café nearby", "Busy is the point."),
                    Step::new(2, "Stay for an hour", "Bring a book or just people-watch."),
                    Step::new(3, "Say thank you by name", "Ask the barista's name. Use it next time."),
                ]),
            ),
        Mission::new("w2-budget-dinner", "Cook a budget dinner", Pillar::AdultMode, WEEK)
            .with_tags(&["cooking", "budget", "vegetarian", "vegan"])
            .with_duration("1 hr")
            .with_xp(70)
            .with_prerequisite("w1-starter-kitchen")
            .with_objective("Cook a proper dinner for less than the price of a takeaway.")
            .with_content(
                MoodContent::new(
                    "A real meal for two for the price of a sandwich.",
                    "Beans, lentils and seasonal veg are the backbone of cheap cooking everywhere.",
                    "Dinner tonight and leftovers for tomorrow.",
                )
                .with_steps(vec![
                    Step::new(1, "Pick a one-pot recipe", "Chilli, dal or a tray bake. Aim for four portions."),
                    Step::new(2, "Shop the list only", "Check your staples first so you don't double buy.")
                        .with_tip("Supermarket own brands are often made in the same factories."),
                    Step::new(3, "Cook and box the leftovers", "Let it cool, then fridge or freeze."),
                ])
                .with_resources(vec![
                    Resource::new(ResourceType::Cost, "Four portions", "Roughly 6-10 in total."),
                    Resource::new(ResourceType::Tip, "Plant-based by default", "Bean and lentil dishes are the cheapest and suit every diet."),
                ]),
            ),
        Mission::new("w2-register-doctor", "Register with a doctor", Pillar::AdultMode, WEEK)
            .with_tags(&["health", "admin"])
            .with_duration("45 min")
            .with_xp(60)
            .with_objective("Be registered before you need to be.")
            .with_content(
                MoodContent::new(
                    "Nobody plans to get sick in week three. Register now.",
                    "Registration takes days to process; illness doesn't wait.",
                    "Confirmation that you're on a practice's list.",
                )
                .with_steps(vec![
                    Step::new(1, "Find practices near you", "Check which ones accept new patients."),
                    Step::new(2, "Fill in the form", "You'll need ID, address and any regular medication."),
                    Step::new(3, "Save the numbers", "Practice phone, out-of-hours line, nearest pharmacy."),
                ])
                .with_resources(vec![Resource::new(
                    ResourceType::Warning,
                    "Emergency number",
                    "Learn the local emergency and non-emergency numbers now.",
                )]),
            ),
        Mission::new("w2-join-a-class", "Try a beginner class", Pillar::Growth, WEEK)
            .with_tags(&["fitness", "social", "growth"])
            .with_duration("1.5 hr")
            .with_xp(60)
            .with_objective("Show up to one class where everyone is new too.")
            .with_content(
                MoodContent::new(
                    "Beginner classes are full of people who also don't know anyone.",
                    "Shared awkwardness is a great shortcut to friendship.",
                    "One class attended, one name remembered.",
                )
                .with_steps(vec![
                    Step::new(1, "Pick something low stakes", "Yoga, climbing, pottery, a running club."),
                    Step::new(2, "Book the taster session", "Many places offer the first one free."),
                    Step::new(3, "Arrive ten minutes early", "Early is when people chat."),
                ]),
            ),
        Mission::new("w2-say-hello", "Say hello to a neighbor", Pillar::Growth, WEEK)
            .with_tags(&["social"])
            .with_duration("10 min")
            .with_xp(40)
            .with_prerequisite("w1-neighborhood-walk")
            .with_objective("Learn the name of one person who lives near you.")
            .with_content(
                MoodContent::new(
                    "One friendly face on your street changes how home feels.",
                    "Neighbors are useful: parcels, spare keys, local tips.",
                    "A name and a wave.",
                )
                .with_steps(vec![
                    Step::new(1, "Pick a moment", "The stairwell, the bins, the front step."),
                    Step::new(2, "Introduce yourself", "\"Hi, I just moved into number 4.\""),
                    Step::new(3, "Ask one question", "Best bakery? Bin day? People love giving local tips."),
                ]),
            ),
    ]
}
