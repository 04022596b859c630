//! Fixed hourly pedestrian-flow reference series.
//!
//! Mock data from the boulevard's reference day. Feeds the gateway's prompt
//! context and the dashboard sparkline.

/// One hourly sample of pedestrian flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowPoint {
    pub hour: &'static str,
    pub flow: u32,
}

/// Reference day, 06:00 through 20:00.
pub const PEDESTRIAN_FLOW: &[FlowPoint] = &[
    FlowPoint { hour: "06:00", flow: 120 },
    FlowPoint { hour: "07:00", flow: 340 },
    FlowPoint { hour: "08:00", flow: 680 },
    FlowPoint { hour: "09:00", flow: 520 },
    FlowPoint { hour: "10:00", flow: 450 },
    FlowPoint { hour: "11:00", flow: 390 },
    FlowPoint { hour: "12:00", flow: 280 },
    FlowPoint { hour: "13:00", flow: 310 },
    FlowPoint { hour: "14:00", flow: 260 },
    FlowPoint { hour: "15:00", flow: 420 },
    FlowPoint { hour: "16:00", flow: 590 },
    FlowPoint { hour: "17:00", flow: 780 },
    FlowPoint { hour: "18:00", flow: 920 },
    FlowPoint { hour: "19:00", flow: 860 },
    FlowPoint { hour: "20:00", flow: 640 },
];

/// The busiest hour of the reference day.
pub fn peak_flow() -> FlowPoint {
    let mut peak = PEDESTRIAN_FLOW[0];
    for point in PEDESTRIAN_FLOW {
        if point.flow > peak.flow {
            peak = *point;
        }
    }
    peak
}
