use std::sync::Arc;

use pol_assistant::client::outbound::{HttpSleepService, MagicPacketService, PingService};
use pol_assistant::client::Client;
use pol_assistant::domain::client::{ApplicationCore, PowerSwitch};
use pol_assistant::domain::entity::WakeTarget;

use crate::cli::Arguments;

pub fn bootstrap(args: &Arguments) -> Client {
    let core = core(args);
    let target = args.mac.map(|mac| WakeTarget::new(mac, args.broadcast));
    let switch = PowerSwitch::new(core, target, args.host.clone());
    Client::new(switch)
}

fn core(args: &Arguments) -> Arc<ApplicationCore> {
    let wake_port = Arc::new(MagicPacketService::new());
    let sleep_port = Arc::new(HttpSleepService::new(args.port));
    let reachability_port = Arc::new(PingService::default());

    let core = ApplicationCore::setup(wake_port, sleep_port, reachability_port);
    Arc::new(core)
}
