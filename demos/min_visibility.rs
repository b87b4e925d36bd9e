use chrono::{Duration, Local};
use visibility_forecast::{VisibilityError, VisibilityForecast};

#[tokio::main]
async fn main() -> Result<(), VisibilityError> {
    let client = VisibilityForecast::builder().build()?;
    let now = Local::now();

    let lowest = client
        .min_visibility()
        .start(now)
        .end(now + Duration::hours(24))
        .call()
        .await?;
    println!("Lowest visibility over the next 24 hours: {}", lowest);

    let series = client
        .hourly_visibility()
        .start(now)
        .end(now + Duration::hours(6))
        .call()
        .await?;
    for hour in series {
        println!("{}  {}", hour.timestamp, hour.visibility);
    }

    Ok(())
}
