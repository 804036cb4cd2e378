//! Test integrand implementations

mod log_sin;
mod oscillatory;
mod runge;

pub use log_sin::log_sin_minus_inv_sq;
pub use oscillatory::oscillatory;
pub use runge::runge;
