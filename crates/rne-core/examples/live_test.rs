use chrono::Local;
use rne_core::{parse_channels, RneScraper, ScheduleDay};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = RneScraper::new()?;

    println!("Descargando la parrilla de hoy...\n");

    let html = scraper.fetch_schedule_page(ScheduleDay::Today).await?;
    let channels = parse_channels(&html)?;

    println!("{} canales encontrados:", channels.len());
    for (i, channel) in channels.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, channel.display_name, channel.channel_id);
    }

    let today = Local::now().date_naive();
    let programs = scraper.programs_for_day(&html, &channels, today).await?;

    println!("\n{} programas en total:", programs.len());
    for program in programs.iter().take(10) {
        let (title, subtitle) = program.title_parts();
        print!("  {} {}", &program.start_time[8..12], title);
        if let Some(subtitle) = subtitle {
            print!(" / {subtitle}");
        }
        println!(" [{}]", program.channel_id);
    }

    Ok(())
}
