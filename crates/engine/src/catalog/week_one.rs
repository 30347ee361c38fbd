//! Week 1: land, orient, cover the basics.

use landfall_domain::{
    Mission, MissionResource as Resource, MissionStep as Step, Mood, MoodContent, Pillar,
    ResourceType, WeekNumber,
};

const WEEK: WeekNumber = WeekNumber::ONE;

pub(super) fn missions() -> Vec<Mission> {
    vec![
        Mission::new("w1-neighborhood-walk", "Walk your neighborhood", Pillar::City, WEEK)
            .with_tags(&["city", "fitness"])
            .with_duration("45 min")
            .with_xp(50)
            .with_objective("Map the ten-minute circle around your front door.")
            .with_content(
                MoodContent::new(
                    "Your street is a stranger. Fix that on foot.",
                    "Maps show streets. Walking shows you which ones feel like yours.",
                    "You know where the nearest pharmacy, grocery and bench are.",
                )
                .with_steps(vec![
                    Step::new(1, "Pick a loop", "Choose four turns that bring you back home in about thirty minutes."),
                    Step::new(2, "Spot the essentials", "Note a grocery, a pharmacy and somewhere to sit.")
                        .with_tip("Drop pins as you go so you can find them again."),
                    Step::new(3, "Find one thing you like", "A mural, a dog, a bakery smell. Anything counts."),
                ])
                .with_resources(vec![
                    Resource::new(ResourceType::App, "Offline maps", "Download your area before you leave the wifi."),
                    Resource::new(ResourceType::Tip, "Go at dusk", "Streets are busy and lit; you see the neighborhood at its most alive."),
                ]),
            )
            .with_mood_content(
                Mood::Overwhelmed,
                MoodContent::new(
                    "Just to the corner and back.",
                    "Ten minutes outside still counts as getting to know the place.",
                    "You saw your street in daylight.",
                )
                .with_steps(vec![
                    Step::new(1, "Step outside", "Shoes, keys, phone. That's the whole plan."),
                    Step::new(2, "Walk one block", "Turn left, walk to the corner, look around."),
                    Step::new(3, "Come back", "You did it. Write down one thing you noticed."),
                ]),
            ),
        Mission::new("w1-transit-card", "Get your transit card", Pillar::City, WEEK)
            .with_tags(&["city", "transit", "budget"])
            .with_duration("30 min")
            .with_xp(40)
            .with_objective("Ride anywhere in the city without fumbling for change.")
            .with_content(
                MoodContent::new(
                    "Unlock the whole city for the price of a coffee a day.",
                    "Single tickets cost more than you think over a month.",
                    "A loaded card in your wallet and one trip taken.",
                )
                .with_steps(vec![
                    Step::new(1, "Find the nearest machine or kiosk", "Most stations sell cards; some corner shops do too."),
                    Step::new(2, "Pick the right fare", "Compare a monthly pass with pay-as-you-go for your commute.")
                        .with_tip("Ask about new-resident or student discounts."),
                    Step::new(3, "Take a test ride", "Ride two stops and back so your first real trip isn't your first trip."),
                ])
                .with_resources(vec![
                    Resource::new(ResourceType::App, "Transit app", "Live departures and route planning."),
                    Resource::new(ResourceType::Cost, "Monthly pass", "Usually pays off after about 25 rides."),
                ]),
            ),
        Mission::new("w1-first-budget", "Build your first budget", Pillar::AdultMode, WEEK)
            .with_tags(&["budget", "admin"])
            .with_duration("1 hr")
            .with_xp(75)
            .with_objective("Know exactly what you can spend each week.")
            .with_content(
                MoodContent::new(
                    "Money stress is mostly not knowing. Let's know.",
                    "A rough budget you follow beats a perfect one you don't.",
                    "One number: your weekly spending limit.",
                )
                .with_steps(vec![
                    Step::new(1, "List fixed costs", "Rent, phone, transit, subscriptions. Monthly amounts."),
                    Step::new(2, "Subtract from income", "What's left is for food, fun and savings."),
                    Step::new(3, "Divide by four", "That's your weekly number. Put it somewhere you'll see it.")
                        .with_tip("Round down. Future you will thank you."),
                ])
                .with_resources(vec![
                    Resource::new(ResourceType::App, "Budgeting app", "Any app that lets you tag spending by category."),
                    Resource::new(ResourceType::Warning, "Deposit and setup fees", "First-month costs are higher. Budget them separately."),
                ]),
            ),
        Mission::new("w1-starter-kitchen", "Stock a starter kitchen", Pillar::AdultMode, WEEK)
            .with_tags(&["cooking", "budget"])
            .with_duration("1.5 hr")
            .with_xp(60)
            .with_objective("Have what you need to cook three simple meals.")
            .with_content(
                MoodContent::new(
                    "Takeaway is expensive. A pan and a pot change everything.",
                    "You need far fewer gadgets than the shops suggest.",
                    "Pan, pot, knife, board and a cupboard of staples.",
                )
                .with_steps(vec![
                    Step::new(1, "Get the core four", "One pan, one pot, one sharp knife, one chopping board."),
                    Step::new(2, "Buy staples", "Rice or pasta, oil, salt, pepper, tinned tomatoes, an onion or two."),
                    Step::new(3, "Cook one thing", "Pasta with tomato sauce. It counts.")
                        .with_tip("Charity shops often have great pans for very little."),
                ])
                .with_resources(vec![
                    Resource::new(ResourceType::Place, "Discount homeware store", "Starter kitchen sets at a fraction of department store prices."),
                    Resource::new(ResourceType::Cost, "Starter kit", "Roughly 40-70 for the basics."),
                ]),
            )
            .with_mood_content(
                Mood::Overwhelmed,
                MoodContent::new(
                    "Forget the full kitchen. Just enough for tonight.",
                    "One working pot is a kitchen.",
                    "You ate something you made.",
                )
                .with_steps(vec![
                    Step::new(1, "Buy one pot", "Any pot you can boil water in."),
                    Step::new(2, "Buy one meal's worth", "Pasta and a jar of sauce."),
                    Step::new(3, "Cook it", "Boil, drain, stir. Done."),
                ]),
            ),
        Mission::new("w1-call-home", "Schedule a call home", Pillar::Growth, WEEK)
            .with_tags(&["social", "growth"])
            .with_duration("20 min")
            .with_xp(30)
            .with_objective("Put a regular catch-up with someone you miss on the calendar.")
            .with_content(
                MoodContent::new(
                    "Moving away doesn't mean drifting away.",
                    "Regular beats long. Fifteen minutes every week keeps people close.",
                    "A recurring call in both your calendars.",
                )
                .with_steps(vec![
                    Step::new(1, "Pick your person", "Who would you call first with good news?"),
                    Step::new(2, "Agree a slot", "Same day, same time, every week. Mind the time zones."),
                    Step::new(3, "Make the first call", "Tell them one thing you've discovered so far."),
                ]),
            )
            .with_mood_content(
                Mood::Lonely,
                MoodContent::new(
                    "You don't have to wait for the schedule. Call today.",
                    "Missing people means you have people worth missing.",
                    "You heard a familiar voice today.",
                )
                .with_steps(vec![
                    Step::new(1, "Send a message now", "\"Free for a quick call?\" is enough."),
                    Step::new(2, "Talk about anything", "It doesn't need to be about the move."),
                    Step::new(3, "Book the next one", "End the call by picking a time for the next."),
                ])
                .with_resources(vec![Resource::new(
                    ResourceType::Tip,
                    "Video on, walk on",
                    "Walking while you talk makes it feel less like an appointment.",
                )]),
            ),
        Mission::new("w1-morning-anchor", "Set a morning anchor", Pillar::Growth, WEEK)
            .with_tags(&["growth", "fitness"])
            .with_duration("15 min")
            .with_xp(30)
            .with_objective("Start each day with one small ritual that's yours.")
            .with_content(
                MoodContent::new(
                    "New place, no routine. Build one tiny piece of it.",
                    "Routines make a strange place feel like home faster than anything.",
                    "Three mornings in a row with the same first ten minutes.",
                )
                .with_steps(vec![
                    Step::new(1, "Choose the ritual", "Stretch, coffee by the window, a short walk. Keep it under ten minutes."),
                    Step::new(2, "Tie it to a trigger", "Right after your alarm, before your phone."),
                    Step::new(3, "Do it three days running", "Tick it off each morning."),
                ]),
            ),
    ]
}
