use flate2::Compression;
use flate2::write::GzEncoder;
use logreport_core::test_support::log_line;
use std::io::Write;

/// Lines in [`banner_log`], malformed ones included.
pub const BANNER_DATASET_LINES: usize = 30;

/// 30 lines: 28 valid records plus malformed lines at positions 7 and 11.
///
/// - `/api/v2/banner/25019908`: 4 requests, sum 4.123, max 1.403, median 1.282
/// - `/api/v2/banner/25047606`: 2 requests, sum 1.49
/// - `/api/v2/banner/25013431`: 1 request, 0.917
/// - 21 other endpoints with one fast request each
///
/// Total request time is 12.135s.
pub fn banner_log() -> String {
    let mut valid: Vec<String> = vec![
        log_line("/api/v2/banner/25019908", "0.156"),
        log_line("/api/v2/banner/25047606", "0.704"),
        log_line("/api/v2/banner/25019908", "1.200"),
        log_line("/api/v2/banner/25013431", "0.917"),
        log_line("/api/v2/banner/25019908", "1.364"),
        log_line("/api/v1/photogenic_banners/list/?server_name=WIN7RB4", "0.405"),
        log_line("/api/v2/banner/25047606", "0.786"),
        log_line("/api/v2/banner/25019908", "1.403"),
    ];
    for group in 0..20 {
        valid.push(log_line(
            &format!("/api/v2/group/{}/banners", 7786670 + group),
            "0.260",
        ));
    }

    let mut lines = valid;
    lines.insert(6, r#"1.99.174.176 3b81f63526fa8  - [29/Jun/2017:03:50:22 +0300] "GET /api/1/photogenic_banners/list/?server_name=WIN7RB4 HTTP/1.1" 200 12 "-" "Python-urllib/2.7" "-" "1498697422-32900793-4708-9752770" "-""#.to_string());
    lines.insert(10, log_line("/api/v2/banner/16852664", "0,390"));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn gzip(contents: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(contents.as_bytes())
        .expect("in-memory gzip write");
    encoder.finish().expect("in-memory gzip finish")
}
