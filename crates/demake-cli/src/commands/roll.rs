use colored::Colorize;
use demake_mechanics::DicePool;

pub fn run(size: i64, difficulty: i32, seed: Option<u64>, json: bool) -> Result<(), String> {
    let pool = DicePool::checked(size, difficulty).map_err(|e| e.to_string())?;
    let mut rng = super::roll_config(seed).rng();
    let result = pool.roll(&mut rng);

    if json {
        println!("{}", super::to_json(&result)?);
        return Ok(());
    }

    println!("  {} {pool}", "Rolling".bold());
    super::print_pool_result(&result);
    Ok(())
}
