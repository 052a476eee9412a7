#![no_main]

use gitinsight_client::{Filter, Period, TimeRange};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = s.parse::<Period>();
        let _ = s.parse::<TimeRange>();

        let ids: Vec<String> = s.split(',').map(str::to_string).collect();
        let query = Filter::new()
            .with_repos(ids)
            .with_message_type(s)
            .heatmap_query();
        assert_eq!(query.len(), 7);
    }
});
