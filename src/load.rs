use itertools::repeat_n;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LoadError;
use crate::point::Point;

pub const DEFAULT_REPLICATION_FACTOR: usize = 200;

pub fn load_dataset(filepath: impl AsRef<Path>, replication_factor: usize) -> Result<Vec<Point>, LoadError> {
    let buf_reader = BufReader::new(File::open(filepath)?);
    parse_dataset(buf_reader, replication_factor)
}

/// Reads one `x,y` pair per line, pushing each point `replication_factor`
/// times. Blank lines are skipped.
pub fn parse_dataset<R: BufRead>(reader: R, replication_factor: usize) -> Result<Vec<Point>, LoadError> {
    if replication_factor == 0 {
        return Err(LoadError::InvalidReplication);
    }

    let mut dataset = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let point = parse_point(trimmed).ok_or_else(|| LoadError::Parse {
            line: index + 1,
            content: line.clone(),
        })?;
        dataset.extend(repeat_n(point, replication_factor));
    }
    Ok(dataset)
}

fn parse_point(line: &str) -> Option<Point> {
    // fields past the second are ignored
    let mut fields = line.split(',');
    let x = fields.next()?.trim().parse::<f32>().ok()?;
    let y = fields.next()?.trim().parse::<f32>().ok()?;
    Some(Point::new(x, y))
}
