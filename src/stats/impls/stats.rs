use std::fmt;
use std::fmt::Formatter;
use crate::config::enums::report_format::ReportFormat;
use crate::stats::structs::stats::Stats;

const NANOS_PER_MILLI: f64 = 1_000_000.0;

fn average(total_nanos: u64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    total_nanos as f64 / NANOS_PER_MILLI / count as f64
}

impl Stats {
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            return 0.0;
        }
        self.hits as f64 / lookups as f64
    }

    pub fn idle_total_ms(&self) -> f64 {
        self.idle_total_nanos as f64 / NANOS_PER_MILLI
    }

    pub fn idle_average_ms(&self) -> f64 {
        average(self.idle_total_nanos, self.idle_count)
    }

    pub fn backend_total_ms(&self) -> f64 {
        self.backend_total_nanos as f64 / NANOS_PER_MILLI
    }

    pub fn backend_average_ms(&self) -> f64 {
        average(self.backend_total_nanos, self.backend_count)
    }

    pub fn backend_max_ms(&self) -> f64 {
        self.backend_max_nanos as f64 / NANOS_PER_MILLI
    }

    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::text => self.to_string(),
            ReportFormat::json => serde_json::json!({
                "hits": self.hits,
                "misses": self.misses,
                "hit_rate": self.hit_rate(),
                "bytes_served": self.bytes_served,
                "idle_total_ms": self.idle_total_ms(),
                "idle_average_ms": self.idle_average_ms(),
                "idle_samples": self.idle_count,
                "backend_total_ms": self.backend_total_ms(),
                "backend_average_ms": self.backend_average_ms(),
                "backend_max_ms": self.backend_max_ms(),
                "backend_samples": self.backend_count,
            }).to_string(),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "hits:{}, misses:{}, wait total:{:.3} ms, avg:{:.3} ms, backend total:{:.3} ms, avg:{:.3} ms, max:{:.3} ms",
            self.hits,
            self.misses,
            self.idle_total_ms(),
            self.idle_average_ms(),
            self.backend_total_ms(),
            self.backend_average_ms(),
            self.backend_max_ms()
        )
    }
}
