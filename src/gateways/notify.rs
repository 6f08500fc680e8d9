use log::{debug, info};
use poimap_core::{
    entities::MapBbox,
    gateways::{NotificationGateway, UserNotice},
};

/// Presentation stand-in that renders user notices into the log.
#[derive(Debug, Default)]
pub struct LogNotificationGateway;

impl NotificationGateway for LogNotificationGateway {
    fn user_notice(&self, notice: UserNotice) {
        info!("[notice] {notice}");
    }

    fn fit_bounds(&self, bbox: &MapBbox) {
        debug!("Fitting map view to {bbox}");
    }
}
