//! One module per supported instrument: the embedded Vietnamese definition,
//! a loader, and the instrument's scoring entry point.

pub mod dass21;
pub mod epds;
pub mod gad7;
pub mod phq9;
pub mod pss10;
