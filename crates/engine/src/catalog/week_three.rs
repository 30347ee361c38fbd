//! Week 3: go further, give back.

use landfall_domain::{
    Mission, MissionResource as Resource, MissionStep as Step, Mood, MoodContent, Pillar,
    ResourceType, WeekNumber,
};

const WEEK: WeekNumber = WeekNumber::THREE;

pub(super) fn missions() -> Vec<Mission> {
    vec![
        Mission::new("w3-market-morning", "Shop a local market", Pillar::City, WEEK)
            .with_tags(&["city", "cooking", "vegetarian", "vegan"])
            .with_duration("1.5 hr")
            .with_xp(60)
            .with_objective("Buy your week's vegetables from the people who grow them.")
            .with_content(
                MoodContent::new(
                    "Markets are where a city shows what it eats.",
                    "Stallholders give better advice than any recipe site.",
                    "A bag of produce and one new ingredient to try.",
                )
                .with_steps(vec![
                    Step::new(1, "Find market day", "Most run weekly; some only at weekends."),
                    Step::new(2, "Walk the whole market first", "Compare before you buy."),
                    Step::new(3, "Ask how to cook something new", "Pick one thing you've never cooked."),
                ])
                .with_resources(vec![
                    Resource::new(ResourceType::Tip, "Go late", "Prices drop in the last hour."),
                    Resource::new(ResourceType::Cost, "Cash", "Smaller stalls may not take cards."),
                ]),
            ),
        Mission::new("w3-day-trip", "Plan a day trip", Pillar::City, WEEK)
            .with_tags(&["city", "budget"])
            .with_duration("Half a day")
            .with_xp(70)
            .with_prerequisite("w1-transit-card")
            .with_objective("Use your transit card to go somewhere beyond your usual zone.")
            .with_content(
                MoodContent::new(
                    "Your city is bigger than your commute.",
                    "The end of a line is often where the interesting stuff is.",
                    "One new neighborhood explored on your own terms.",
                )
                .with_steps(vec![
                    Step::new(1, "Pick a destination", "A park, a neighborhood or a viewpoint within an hour."),
                    Step::new(2, "Plan there and back", "Check last departures before you go."),
                    Step::new(3, "Eat something local", "Find one place only locals would know."),
                ]),
            ),
        Mission::new("w3-laundry-system", "Set up a laundry system", Pillar::AdultMode, WEEK)
            .with_tags(&["admin"])
            .with_duration("30 min")
            .with_xp(40)
            .with_objective("Never run out of clean clothes again.")
            .with_content(
                MoodContent::new(
                    "Laundry is boring. Make it automatic.",
                    "A fixed laundry day removes a surprising amount of low-level stress.",
                    "A laundry day in your calendar and a basket that works.",
                )
                .with_steps(vec![
                    Step::new(1, "Find your machines", "In-building, launderette or service wash."),
                    Step::new(2, "Pick a laundry day", "Same day every week."),
                    Step::new(3, "Do the first load", "Read the care labels once. Then you know."),
                ])
                .with_resources(vec![Resource::new(
                    ResourceType::Warning,
                    "Dryer heat",
                    "High heat shrinks wool and cotton.",
                )]),
            ),
        Mission::new("w3-meal-prep", "Meal prep for the week", Pillar::AdultMode, WEEK)
            .with_tags(&["cooking", "budget", "fitness", "vegetarian", "vegan"])
            .with_duration("2 hr")
            .with_xp(80)
            .with_prerequisite("w2-budget-dinner")
            .with_objective("Cook once on Sunday, eat well until Thursday.")
            .with_content(
                MoodContent::new(
                    "Two hours on Sunday buys you a calm week.",
                    "Meal prep is the single biggest saver of money and evenings.",
                    "Four lunches boxed and labelled.",
                )
                .with_steps(vec![
                    Step::new(1, "Choose two recipes", "One grain, one protein. Mix and match."),
                    Step::new(2, "Batch cook", "Oven and hob at the same time."),
                    Step::new(3, "Portion and label", "Date everything; eat the oldest first.")
                        .with_tip("Cooked rice keeps one day. Grains like farro keep four."),
                ])
                .with_resources(vec![Resource::new(
                    ResourceType::Cost,
                    "Containers",
                    "A stack of reusable boxes costs about the same as two lunches out.",
                )]),
            )
            .with_mood_content(
                Mood::Overwhelmed,
                MoodContent::new(
                    "Just tomorrow's lunch. That's the whole mission today.",
                    "One prepared meal is one less decision tomorrow.",
                    "Tomorrow's lunch is in the fridge.",
                )
                .with_steps(vec![
                    Step::new(1, "Cook a double portion tonight", "Whatever you're already making."),
                    Step::new(2, "Box half", "Before you eat, so it actually happens."),
                    Step::new(3, "Put it by the door", "Or set a reminder to grab it."),
                ]),
            ),
        Mission::new("w3-host-potluck", "Host a mini potluck", Pillar::Growth, WEEK)
            .with_tags(&["social", "cooking"])
            .with_duration("3 hr")
            .with_xp(90)
            .with_prerequisite("w2-say-hello")
            .with_objective("Have three people over, each bringing one dish.")
            .with_content(
                MoodContent::new(
                    "You've met people. Now make them your people.",
                    "Hosting feels big but a potluck spreads the work.",
                    "A table of food and a group chat that didn't exist before.",
                )
                .with_steps(vec![
                    Step::new(1, "Invite three people", "A neighbor, a classmate, a colleague."),
                    Step::new(2, "Make one dish yourself", "Your budget dinner scaled up works perfectly."),
                    Step::new(3, "Start a group chat", "Share photos after. Plan the next one."),
                ]),
            )
            .with_mood_content(
                Mood::Overwhelmed,
                MoodContent::new(
                    "Skip hosting. Bring one dish somewhere instead.",
                    "Joining someone else's table counts too.",
                    "You shared food with someone.",
                )
                .with_steps(vec![
                    Step::new(1, "Ask one person for coffee", "Coffee is a potluck of two."),
                    Step::new(2, "Bring a small treat", "Biscuits from the market are plenty."),
                    Step::new(3, "Suggest a next time", "No date needed yet."),
                ]),
            ),
        Mission::new("w3-volunteer-shift", "Sign up for a volunteer shift", Pillar::Growth, WEEK)
            .with_tags(&["social", "growth", "city"])
            .with_duration("2-3 hr")
            .with_xp(70)
            .with_objective("Give a few hours to something local.")
            .with_content(
                MoodContent::new(
                    "Helping is the fastest way to belong.",
                    "Volunteers meet the most connected people in any community.",
                    "One shift done and a reason to go back.",
                )
                .with_steps(vec![
                    Step::new(1, "Browse local organisations", "Food banks, gardens, animal shelters."),
                    Step::new(2, "Sign up for one shift", "Pick a one-off slot to start."),
                    Step::new(3, "Show up and ask questions", "Everyone was new once."),
                ])
                .with_resources(vec![Resource::new(
                    ResourceType::App,
                    "Volunteering platform",
                    "Lists one-off shifts near you.",
                )]),
            ),
    ]
}
