//! Week 4: own it, look back, look ahead.

use landfall_domain::{
    Mission, MissionResource as Resource, MissionStep as Step, Mood, MoodContent, Pillar,
    ResourceType, WeekNumber,
};

const WEEK: WeekNumber = WeekNumber::FOUR;

pub(super) fn missions() -> Vec<Mission> {
    vec![
        Mission::new("w4-show-someone-around", "Show someone your city", Pillar::City, WEEK)
            .with_tags(&["city", "social"])
            .with_duration("Half a day")
            .with_xp(80)
            .with_prerequisite("w2-find-your-cafe")
            .with_objective("Give a friend or visitor your personal tour.")
            .with_content(
                MoodContent::new(
                    "A month ago you needed a map. Now you're the guide.",
                    "Showing a place off is how you find out it's become yours.",
                    "A tour with at least three of your own spots.",
                )
                .with_steps(vec![
                    Step::new(1, "Invite someone", "A friend from home, a new friend, anyone curious."),
                    Step::new(2, "Plan your route", "Your third place, your market, your favourite view."),
                    Step::new(3, "Tell one story per stop", "Why you like it, what happened there."),
                ]),
            )
            .with_mood_content(
                Mood::Lonely,
                MoodContent::new(
                    "Give the tour over video. Home gets to see where you live.",
                    "Sharing your new place with old friends bridges both worlds.",
                    "People back home can picture your life now.",
                )
                .with_steps(vec![
                    Step::new(1, "Schedule a video walk", "Pick a time that works across time zones."),
                    Step::new(2, "Walk your favourite route", "Camera facing out."),
                    Step::new(3, "End at your third place", "Order their usual for them; drink it yourself."),
                ]),
            ),
        Mission::new("w4-night-out", "Plan a night out", Pillar::City, WEEK)
            .with_tags(&["city", "social", "budget"])
            .with_duration("An evening")
            .with_xp(60)
            .with_objective("See what your city does after dark, within your budget.")
            .with_content(
                MoodContent::new(
                    "You've done the daytime city. Now the evening one.",
                    "Free gigs, late museums and open mics are everywhere once you look.",
                    "One evening event attended.",
                )
                .with_steps(vec![
                    Step::new(1, "Find free or cheap events", "Listings sites, library boards, venue newsletters."),
                    Step::new(2, "Invite someone", "Or go solo; solo is a great way to meet people."),
                    Step::new(3, "Plan the way home", "Last train, night bus or a shared ride."),
                ])
                .with_resources(vec![Resource::new(
                    ResourceType::Warning,
                    "Late transit",
                    "Check night service before you leave home.",
                )]),
            ),
        Mission::new("w4-budget-review", "Review your budget", Pillar::AdultMode, WEEK)
            .with_tags(&["budget", "admin"])
            .with_duration("45 min")
            .with_xp(90)
            .with_prerequisite("w1-first-budget")
            .with_objective("Compare month one with the plan and adjust month two.")
            .with_content(
                MoodContent::new(
                    "Your first month of real numbers is in. Let's read them.",
                    "Nobody hits their first budget. The review is where it gets good.",
                    "A month-two budget based on what actually happened.",
                )
                .with_steps(vec![
                    Step::new(1, "Pull your statements", "All accounts, the whole month."),
                    Step::new(2, "Tag every transaction", "Fixed, food, fun, one-off."),
                    Step::new(3, "Adjust the weekly number", "Raise it, lower it, or keep it. Decide on purpose."),
                ]),
            ),
        Mission::new("w4-emergency-kit", "Build an emergency kit", Pillar::AdultMode, WEEK)
            .with_tags(&["admin", "health"])
            .with_duration("1 hr")
            .with_xp(50)
            .with_objective("Be ready for a power cut, a cold or a lost key.")
            .with_content(
                MoodContent::new(
                    "Future you, sick on a Sunday, will be grateful.",
                    "Most emergencies are small and boring; preparation is too.",
                    "One box with everything in it.",
                )
                .with_steps(vec![
                    Step::new(1, "Medicine basics", "Painkillers, plasters, cold remedies, a thermometer."),
                    Step::new(2, "Power-cut kit", "Torch, batteries, phone power bank."),
                    Step::new(3, "Paper backups", "Key contacts, landlord number, a spare key plan."),
                ])
                .with_resources(vec![Resource::new(
                    ResourceType::Cost,
                    "Full kit",
                    "Around 25-35 if you buy own-brand.",
                )]),
            ),
        Mission::new("w4-month-reflection", "Write your month-one letter", Pillar::Growth, WEEK)
            .with_tags(&["growth"])
            .with_duration("30 min")
            .with_xp(100)
            .with_objective("Write down what this month changed.")
            .with_content(
                MoodContent::new(
                    "Four weeks ago you didn't know where the shops were.",
                    "Progress is invisible until you write it down.",
                    "A letter to yourself you can reread on a hard day.",
                )
                .with_steps(vec![
                    Step::new(1, "List what's new", "Places, people, skills."),
                    Step::new(2, "Name a hard moment", "And how you got through it."),
                    Step::new(3, "Write one line for month two", "What do you want more of?"),
                ]),
            ),
        Mission::new("w4-plan-month-two", "Plan month two", Pillar::Growth, WEEK)
            .with_tags(&["growth", "social", "fitness"])
            .with_duration("30 min")
            .with_xp(100)
            .with_prerequisite("w4-month-reflection")
            .with_objective("Turn what you learned into three commitments.")
            .with_content(
                MoodContent::new(
                    "You've landed. Now choose where to go.",
                    "Three clear commitments beat a long wish list.",
                    "Three things in your calendar for next month.",
                )
                .with_steps(vec![
                    Step::new(1, "Pick one habit to keep", "The morning anchor, the laundry day, the weekly call."),
                    Step::new(2, "Pick one thing to try", "A class, a trip, a club."),
                    Step::new(3, "Pick one person to see more", "Put a date in both your calendars."),
                ]),
            ),
    ]
}
