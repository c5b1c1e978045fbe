/// Exposes a monthly monetary amount.
pub trait Amounted {
    fn amount(&self) -> f64;
}
