//! Selected telemetry time range and the props fanned out to every graph.
//!
//! DESIGN
//! ======
//! The metrics panel owns the only writable copy of the window. Graphs get a
//! [`GraphProps`] value derived from it and cannot write back.

#[cfg(test)]
#[path = "time_window_test.rs"]
mod time_window_test;

/// Windows shorter than this are served at fine granularity.
pub const RECENT_WINDOW_SECS: i64 = 25 * 60 * 60;

/// Start/end instants in unix seconds. Both zero until the user selects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn duration_secs(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// True when the window spans less than [`RECENT_WINDOW_SECS`].
    pub fn is_recent(&self) -> bool {
        self.duration_secs() < RECENT_WINDOW_SECS
    }
}

/// Canned ranges offered by the range selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRangePreset {
    #[default]
    Past30Minutes,
    Past12Hours,
    Past24Hours,
    Past7Days,
    Past30Days,
    PastYear,
}

impl TimeRangePreset {
    pub const ALL: [Self; 6] = [
        Self::Past30Minutes,
        Self::Past12Hours,
        Self::Past24Hours,
        Self::Past7Days,
        Self::Past30Days,
        Self::PastYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Past30Minutes => "Past 30 Minutes",
            Self::Past12Hours => "Past 12 Hours",
            Self::Past24Hours => "Past 24 Hours",
            Self::Past7Days => "Past 7 Days",
            Self::Past30Days => "Past 30 Days",
            Self::PastYear => "Past Year",
        }
    }

    /// Config key, e.g. `past_30_minutes`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Past30Minutes => "past_30_minutes",
            Self::Past12Hours => "past_12_hours",
            Self::Past24Hours => "past_24_hours",
            Self::Past7Days => "past_7_days",
            Self::Past30Days => "past_30_days",
            Self::PastYear => "past_year",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn span_secs(self) -> i64 {
        const HOUR: i64 = 60 * 60;
        const DAY: i64 = 24 * HOUR;
        match self {
            Self::Past30Minutes => 30 * 60,
            Self::Past12Hours => 12 * HOUR,
            Self::Past24Hours => DAY,
            Self::Past7Days => 7 * DAY,
            Self::Past30Days => 30 * DAY,
            Self::PastYear => 365 * DAY,
        }
    }

    pub fn window_ending_at(self, now: i64) -> TimeWindow {
        TimeWindow::new(now - self.span_secs(), now)
    }
}

/// The graphs on the overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKind {
    Cpu,
    Memory,
    Network,
    Disk,
    Load,
}

impl MetricKind {
    pub const ALL: [Self; 5] = [Self::Cpu, Self::Memory, Self::Network, Self::Disk, Self::Load];

    pub fn title(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Memory => "Memory",
            Self::Network => "Network",
            Self::Disk => "Disk I/O",
            Self::Load => "Load",
        }
    }
}

/// What every graph receives. Identical for all graphs at any moment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphProps {
    pub client_key: String,
    pub timezone: String,
    /// Whether the window is recent enough for fine-grained data.
    pub is_today: bool,
    pub start: i64,
    pub end: i64,
}

impl GraphProps {
    pub fn new(client_key: impl Into<String>, timezone: impl Into<String>, window: TimeWindow) -> Self {
        Self {
            client_key: client_key.into(),
            timezone: timezone.into(),
            is_today: window.is_recent(),
            start: window.start,
            end: window.end,
        }
    }
}
