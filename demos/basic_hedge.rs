//! Example: LP position hedged with a put
//!
//! Run with: cargo run --example basic_hedge

use lp_hedge::prelude::*;

fn main() -> HedgeResult<()> {
    // LP: 10,000 USDC of liquidity at S0 = 100 over [80, 120]
    let position = LiquidityPosition::from_bounds(100.0, 80.0, 120.0, 10_000.0)?;
    let model = LiquidityModel::from_position(&position)?;
    let diag = model.diagnostics();

    println!("=== Liquidity Position ===\n");
    println!("K:      {:.4}", diag.k);
    println!("r:      {:.6}", diag.r);
    println!("alpha:  {:.4}", diag.alpha);
    println!("L:      {:.4}", diag.liquidity);
    println!("V(70):  {:.2}", model.value(70.0));
    println!("V(100): {:.2}", model.value(100.0));
    println!("V(150): {:.2}", model.value(150.0));

    // Put: strike 100, premium 5, 1 contract
    let put = OptionContract::new(100.0, 5.0, 1.0, Side::Buy, 6.0, 180.0, 0.5)?;

    println!("\n=== Put Option ===\n");
    for &s in &[90.0, 100.0, 110.0] {
        println!(
            "S = {:>6.2}: intrinsic {:>6.2}, expiry PNL {:>6.2}, theoretical PNL {:>6.2}",
            s,
            intrinsic(s, put.strike),
            payoff_at_expiry(s, &put),
            theoretical_pnl(s, &put)?
        );
    }
    let sigma = annualize_vol(put.iv_at_horizon, put.iv_horizon_days)?;
    let greeks = put_greeks(100.0, put.strike, put.time_to_expiry(), sigma);
    println!("Annualized vol: {:.2}%", sigma * 100.0);
    println!("ATM delta:      {:.4}", greeks.delta);

    // Hedge sized to the LP's downside exposure
    let hedge = OptionContract::new(100.0, 5.0, 100.0, Side::Buy, 6.0, 180.0, 0.5)?;
    let curves = combined_curve(&position, &hedge, PayoffMode::Expiry, 300)?;

    println!("\n=== Combined (expiry) ===\n");
    println!("Domain: [{:.2}, {:.2}]", curves.domain.low(), curves.domain.high());
    if let Some(worst) = curves.min_combined() {
        println!("Worst combined value {:.2} at price {:.2}", worst.value, worst.price);
    }

    // Deposits outside the range: warned, still finite
    let range = PriceRange::new(80.0, 120.0)?;
    let derived = deposit_liquidity(10.0, 500.0, 130.0, &range)?;
    println!("\n=== Deposit outside range ===\n");
    println!("L = {:.4}", derived.liquidity);
    for warning in &derived.warnings {
        println!("Warning: {}", warning);
    }

    // Equal bounds are rejected before any arithmetic
    match PriceRange::new(100.0, 100.0) {
        Ok(_) => println!("unexpected: degenerate range accepted"),
        Err(e) => println!("\nRejected: {}", e),
    }

    Ok(())
}
