use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use touch_gestures::{GestureVerdict, ManipulationEvent, Point, PointerId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TraceRecord {
    pub(crate) line_no: usize,
    pub(crate) ms: u64,
    pub(crate) event: ManipulationEvent,
}

/// Parses `kind,ms,...` callback lines; blank lines and `#` comments are skipped.
pub(crate) fn parse_trace(source: &str, origin: &Path) -> Result<Vec<TraceRecord>> {
    let mut out = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        let at = || format!("{}:{}", origin.display(), line_no);
        let ms = parse_field::<u64>(parts.get(1).copied(), "ms").with_context(at)?;

        let event = match (parts[0], parts.len()) {
            ("starting", 2) => ManipulationEvent::Starting,
            ("completed", 2) => ManipulationEvent::Completed,
            ("started", 4) => ManipulationEvent::Started {
                origin: Point::new(
                    parse_field(Some(parts[2]), "x").with_context(at)?,
                    parse_field(Some(parts[3]), "y").with_context(at)?,
                ),
                now_ms: ms,
            },
            ("moved", 5) => ManipulationEvent::PointerMoved {
                pointer: PointerId(parse_field(Some(parts[2]), "pointer_id").with_context(at)?),
                point: Point::new(
                    parse_field(Some(parts[3]), "x").with_context(at)?,
                    parse_field(Some(parts[4]), "y").with_context(at)?,
                ),
            },
            (kind @ ("starting" | "completed" | "started" | "moved"), columns) => {
                bail!("{}: `{kind}` line has {columns} columns", at())
            }
            (kind, _) => bail!("{}: unknown callback kind `{kind}`", at()),
        };

        out.push(TraceRecord { line_no, ms, event });
    }
    Ok(out)
}

/// One verdict label per non-comment line.
pub(crate) fn parse_expected(source: &str, origin: &Path) -> Result<Vec<GestureVerdict>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let token = line.trim();
            !token.is_empty() && !token.starts_with('#')
        })
        .map(|(idx, line)| {
            let token = line.trim().to_ascii_lowercase();
            GestureVerdict::from_label(&token).ok_or_else(|| {
                anyhow!(
                    "{}:{} invalid expected verdict: {}",
                    origin.display(),
                    idx + 1,
                    token
                )
            })
        })
        .collect()
}

fn parse_field<T>(raw: Option<&str>, field: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = raw.ok_or_else(|| anyhow!("missing {field}"))?;
    raw.parse::<T>()
        .with_context(|| format!("invalid {field} '{raw}'"))
}
