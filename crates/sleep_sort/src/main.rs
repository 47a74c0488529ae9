use sleep_sort::sleep_sort;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sleep_sort=info".into()),
        )
        .init();

    let values = vec![15, 8, 42, 16, 4, 23];
    info!(?values, "sorting");

    let sorted = sleep_sort(&values)?;

    println!("Input:  {:?}", values);
    println!("Sorted: {:?}", sorted);

    Ok(())
}
