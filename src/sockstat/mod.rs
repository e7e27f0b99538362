//! Socket statistics data model and positional parser
//!
//! The kernel record is line-oriented: each line starts with a category
//! label (`sockets:`, `TCP:`, ...) followed by alternating metric-name and
//! value tokens, e.g. `TCP: inuse 28 orphan 0 tw 10 alloc 32 mem 4`. Values
//! are picked out by fixed token position and kept as opaque text. A
//! category the kernel was built without has no line at all; its fields
//! resolve to [`UNAVAILABLE`].
use serde::Serialize;
use std::collections::HashMap;

/// Placeholder for fields the running kernel does not report.
pub const UNAVAILABLE: &str = "N/A";

const SOCKETS: &str = "sockets:";
const TCP: &str = "TCP:";
const UDP: &str = "UDP:";
const UDPLITE: &str = "UDPLITE:";
const RAW: &str = "RAW:";
const FRAG: &str = "FRAG:";

/// Value token offsets per category line, 0-based after splitting the line
/// on whitespace. The kernel interleaves metric-name and value tokens, so
/// values sit at even offsets.
const LAYOUT: &[(&str, &[(&str, usize)])] = &[
    (SOCKETS, &[("used", 2)]),
    (
        TCP,
        &[
            ("inuse", 2),
            ("orphan", 4),
            ("time_wait", 6),
            ("allocated", 8),
            ("memory", 10),
        ],
    ),
    (UDP, &[("inuse", 2), ("memory", 4)]),
    (UDPLITE, &[("inuse", 2)]),
    (RAW, &[("inuse", 2)]),
    (FRAG, &[("inuse", 2), ("memory", 4)]),
];

/// One parsed snapshot of the socket statistics record.
///
/// Serializes to the fixed shape downstream consumers expect: category names
/// as outer keys, metric names as inner keys, every leaf a string. Absent
/// categories keep their keys and carry the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SockstatReport {
    #[serde(rename = "SocketsUsed")]
    pub sockets_used: String,
    #[serde(rename = "TCP")]
    pub tcp: TcpStats,
    #[serde(rename = "UDP")]
    pub udp: UdpStats,
    #[serde(rename = "UDPLITE")]
    pub udplite: UdpliteStats,
    #[serde(rename = "RAW")]
    pub raw: RawStats,
    #[serde(rename = "FRAG")]
    pub frag: FragStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TcpStats {
    pub inuse: String,
    pub orphan: String,
    pub time_wait: String,
    pub allocated: String,
    pub memory: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UdpStats {
    pub inuse: String,
    pub memory: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UdpliteStats {
    pub inuse: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawStats {
    pub inuse: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragStats {
    pub inuse: String,
    pub memory: String,
}

/// Extract every (category, field) value named in [`LAYOUT`].
///
/// One pass over the lines to find each category (label match is
/// case-sensitive and anchored at line start, first match wins), one
/// tokenization per matched line, then constant-time indexed lookups. A
/// missing line or a line with too few tokens degrades field-by-field to
/// the sentinel.
fn extract(raw: &str) -> HashMap<(&'static str, &'static str), String> {
    let mut matched: HashMap<&'static str, Vec<&str>> = HashMap::new();
    for line in raw.lines() {
        if let Some((label, _)) = LAYOUT.iter().find(|(label, _)| line.starts_with(label)) {
            matched
                .entry(*label)
                .or_insert_with(|| line.split_whitespace().collect());
        }
    }

    let mut values = HashMap::new();
    for (label, fields) in LAYOUT {
        let tokens = matched.get(label);
        for (name, index) in *fields {
            let value = tokens
                .and_then(|tokens| tokens.get(*index))
                .map(|token| token.to_string())
                .unwrap_or_else(|| UNAVAILABLE.to_string());
            values.insert((*label, *name), value);
        }
    }
    values
}

/// Parse raw socket statistics text into a report.
///
/// Never fails: whatever the input looks like, every field ends up either a
/// value token or the sentinel.
pub fn parse(raw: &str) -> SockstatReport {
    let mut values = extract(raw);
    let mut take = |label: &'static str, name: &'static str| {
        values
            .remove(&(label, name))
            .unwrap_or_else(|| UNAVAILABLE.to_string())
    };

    SockstatReport {
        sockets_used: take(SOCKETS, "used"),
        tcp: TcpStats {
            inuse: take(TCP, "inuse"),
            orphan: take(TCP, "orphan"),
            time_wait: take(TCP, "time_wait"),
            allocated: take(TCP, "allocated"),
            memory: take(TCP, "memory"),
        },
        udp: UdpStats {
            inuse: take(UDP, "inuse"),
            memory: take(UDP, "memory"),
        },
        udplite: UdpliteStats {
            inuse: take(UDPLITE, "inuse"),
        },
        raw: RawStats {
            inuse: take(RAW, "inuse"),
        },
        frag: FragStats {
            inuse: take(FRAG, "inuse"),
            memory: take(FRAG, "memory"),
        },
    }
}
