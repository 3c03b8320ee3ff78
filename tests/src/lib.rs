//! Integration and property tests that exercise the engines through their
//! public surface only.

#[cfg(test)]
mod comparison;
#[cfg(test)]
mod raid;
#[cfg(test)]
mod subnet;
#[cfg(test)]
mod units;
