//! Value objects: small immutable vocabulary types.

mod mood;
mod pillar;
mod tags;
mod week;

pub use mood::Mood;
pub use pillar::Pillar;
pub use tags::tag_overlap;
pub use week::WeekNumber;
