//! Ganzhi module - The fixed stem/branch vocabulary and its lookup tables.
//!
//! Every table here is compile-time constant data indexed by closed enums,
//! so lookups are total and safe to share across threads without locking.
//!
//! # Components
//!
//! - `Element`, `Polarity` - Five elements with generating/restraining cycles
//! - `Stem`, `Branch` - The 10 Heavenly Stems and 12 Earthly Branches
//! - `hidden_stems` - Hidden stems per branch, dominant qi first
//! - `longevity` - Twelve Longevity sequence per stem
//! - `sexagenary` - Sixty-term cycle: void branches and Na Yin
//! - `stars` - Stars activated by branches per Day Master
//! - `TenGodClassifier` - Relation of any stem to the Day Master

mod branch;
mod element;
pub mod hidden_stems;
pub mod longevity;
pub mod sexagenary;
mod stars;
mod stem;
mod ten_god;

pub use branch::Branch;
pub use element::{Element, Polarity};
pub use longevity::{longevity_stage, LongevityStage};
pub use sexagenary::{is_void, sexagenary_index, void_branches, NaYin};
pub use stars::{ActivatedStar, Star, StarTable};
pub use stem::Stem;
pub use ten_god::{TenGod, TenGodClassifier};
