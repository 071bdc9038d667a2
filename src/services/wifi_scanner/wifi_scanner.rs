use std::process::Command;

/// A wireless access point visible to the local radio. The BSSID is the
/// coarse location signal the geolocation endpoint keys on; the signal is
/// nmcli's 0-100 quality percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessPoint {
    pub bssid: String,
    pub signal: Option<i32>,
}

#[derive(Debug)]
pub enum WifiScanError {
    Spawn(String),
    Scan(String),
}

impl std::fmt::Display for WifiScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            WifiScanError::Spawn(e) => write!(f, "Failed to run nmcli: {}", e),
            WifiScanError::Scan(e) => write!(f, "Wifi scan failed: {}", e),
        }
    }
}

/// Enumerates currently visible access points via NetworkManager. An empty
/// list is a valid outcome (no networks in range), not an error.
pub fn scan_access_points() -> Result<Vec<AccessPoint>, WifiScanError> {
    let output = Command::new("nmcli")
        .args(["-t", "-f", "BSSID,SIGNAL", "dev", "wifi", "list"])
        .output()
        .map_err(|e| WifiScanError::Spawn(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(WifiScanError::Scan(stderr));
    }

    Ok(parse_scan_output(&String::from_utf8_lossy(&output.stdout)))
}

/// Parses nmcli terse output. Fields are separated by unescaped colons;
/// the colons inside the BSSID itself arrive escaped as `\:`.
pub fn parse_scan_output(raw: &str) -> Vec<AccessPoint> {
    raw.lines()
        .filter_map(|line| {
            let fields = split_terse_line(line.trim());
            let bssid = fields.first()?.to_uppercase();
            if bssid.split(':').count() != 6 {
                return None;
            }
            let signal = fields.get(1).and_then(|s| s.parse::<i32>().ok());
            Some(AccessPoint { bssid, signal })
        })
        .collect()
}

fn split_terse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ':' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_escaped_bssids_and_signal() {
        let raw = "A4\\:2B\\:B0\\:C1\\:5E\\:01:82\nD8\\:47\\:32\\:9F\\:00\\:AA:47\n";

        let access_points = parse_scan_output(raw);

        assert_eq!(
            access_points,
            vec![
                AccessPoint {
                    bssid: "A4:2B:B0:C1:5E:01".to_string(),
                    signal: Some(82),
                },
                AccessPoint {
                    bssid: "D8:47:32:9F:00:AA".to_string(),
                    signal: Some(47),
                },
            ]
        );
    }

    #[test]
    fn skips_lines_that_are_not_mac_addresses() {
        let raw = "\n--:12\nA4\\:2B\\:B0\\:C1\\:5E\\:01:82\n";

        let access_points = parse_scan_output(raw);

        assert_eq!(access_points.len(), 1);
        assert_eq!(access_points[0].bssid, "A4:2B:B0:C1:5E:01");
    }

    #[test]
    fn tolerates_a_missing_signal_column() {
        let access_points = parse_scan_output("A4\\:2B\\:B0\\:C1\\:5E\\:01");

        assert_eq!(access_points.len(), 1);
        assert_eq!(access_points[0].signal, None);
    }

    #[test]
    fn empty_scan_yields_empty_list() {
        assert!(parse_scan_output("").is_empty());
    }
}
