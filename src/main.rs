use customer360::{Dashboard, DataSources};
use std::path::PathBuf;

fn main() {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let usage = "Usage: customer360 {profiles.csv} {portfolio.csv} {transactions.csv}";
    let sources = DataSources {
        profile: PathBuf::from(args.next().expect(usage)),
        portfolio: PathBuf::from(args.next().expect(usage)),
        transactions: PathBuf::from(args.next().expect(usage)),
    };
    let dashboard = Dashboard::load(&sources)
        .unwrap_or_else(|err| panic!("Failed to load dashboard data: {err}"));
    let Some(customer) = dashboard.current_customer() else {
        println!("No customers in the profile dataset");
        return;
    };
    println!(
        "Customer: {} ({}), {} customers total",
        customer.full_name(),
        customer.customer_id,
        dashboard.customer_list().len()
    );
    let summary = dashboard.aggregated_portfolio(&customer.customer_id);
    let mut stdout = std::io::stdout().lock();
    customer360::io::write_allocation_to_csv(&mut stdout, &summary)
        .unwrap_or_else(|err| panic!("Failed to write allocation report: {err}"));
    let spending = dashboard.spending_summary(&customer.customer_id);
    for (category, total) in &spending {
        println!("spent {total} on {category}");
    }
}
