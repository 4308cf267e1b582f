use anyhow::Result;
use chrono::Utc;

use krs_monitor::{
    load_from_env, read_recipients, read_registry_ids, ConsoleSink, DateWindow, DeliverySink,
    KrsApiFetcher, Monitor, ReportRenderer, SmtpSink,
};

fn main() -> Result<()> {
    println!("🚀 KRS capital monitor starting.");

    let config = load_from_env()?;

    // Recipients first: without them there is nobody to report to
    let recipients = read_recipients(&config.recipients_path)?;
    if recipients.is_empty() {
        println!("No recipients configured in '{}'. Nothing to do.", config.recipients_path.display());
        return Ok(());
    }
    println!("📧 Loaded {} recipient(s).", recipients.len());

    let registry_ids = read_registry_ids(&config.registry_list_path)?;
    if registry_ids.is_empty() {
        println!("🏁 The list of companies to check is empty. Done.");
        return Ok(());
    }
    println!("📄 Loaded {} KRS number(s) to monitor.\n", registry_ids.len());

    let end = Utc::now().date_naive();
    let window = DateWindow::trailing_days(end, config.days_to_check);

    let fetcher = KrsApiFetcher::new(&config.api_base_url)?;
    let monitor = Monitor::new(&fetcher, config.api_call_delay);
    let events = monitor.run(&registry_ids, &window);

    if events.is_empty() {
        println!("\n✅ No share capital changes found in the period {}.", window.describe());
        println!("🏁 Run complete.");
        return Ok(());
    }

    println!("\n📊 Found {} capital change(s).", events.len());

    let renderer = ReportRenderer::new();
    let body = renderer.render(&events, &window);

    let sink: Box<dyn DeliverySink> = match config.smtp() {
        Some(smtp) => Box::new(SmtpSink::new(smtp)),
        None => Box::new(ConsoleSink),
    };

    // A delivery failure is reported but does not fail the run; the
    // analysis already happened and the next scheduled run is independent.
    if let Err(err) = sink.deliver(renderer.subject(), &body, &recipients) {
        eprintln!("❌ Report delivery failed: {:#}", err);
    }

    println!("🏁 Run complete.");
    Ok(())
}
