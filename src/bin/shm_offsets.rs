use std::io;

use shmtime::{write_report, ShmTimeLayout, TargetModel};

fn main() {
    env_logger::init();

    let layout = ShmTimeLayout::measure();
    log::debug!("measured layout: {:?}", layout);

    if let Err(e) = layout.verify_against(&ShmTimeLayout::compiled()) {
        log::warn!("address probe disagrees with offset_of!: {}", e);
    }

    let model = TargetModel::host();
    match layout.verify_against(&model.layout()) {
        Ok(()) => log::debug!(
            "layout matches {} model (time_t = {} bytes)",
            model.name(),
            model.time_width()
        ),
        Err(e) => log::warn!("layout differs from {} model: {}", model.name(), e),
    }

    let stdout = io::stdout();
    if let Err(e) = write_report(&layout, stdout.lock()) {
        log::error!("failed to write report: {}", e);
    }
}
