use crate::domain::market::stock_params::StockParams;
use rand::Rng;
use rand_distr::StandardNormal;

/// Simulates `day_count` closes with a unit-step geometric random walk.
///
/// The first close is exactly `base_price`. Each later close applies
/// `drift + volatility * shock` to the previous one and is floored at
/// [`StockParams::price_floor`]. Consumes one normal draw per step.
pub fn simulate_closes<R: Rng>(rng: &mut R, params: &StockParams, day_count: usize) -> Vec<f64> {
    if day_count == 0 {
        return Vec::new();
    }

    let floor = params.price_floor();
    let mut prices = Vec::with_capacity(day_count);
    prices.push(params.base_price);

    for _ in 1..day_count {
        let previous = prices[prices.len() - 1];
        let shock: f64 = rng.sample(StandardNormal);
        let price_change = previous * (params.drift + params.volatility * shock);
        prices.push((previous + price_change).max(floor));
    }

    prices
}
