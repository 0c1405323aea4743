use crate::reports;
use bodymetrics::metrics::gauge_bands;

pub fn run() {
    println!("\n⚖️  === BMI SCALE === ⚖️");
    reports::print_category_table(&gauge_bands());
}
