pub mod profile;
pub mod propensity;
pub mod region;
pub mod residue;
pub mod thresholds;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
