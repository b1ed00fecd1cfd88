use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct CleanEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> CleanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting phone cleaning...");

        // Extract
        println!("Reading input...");
        let table = self.pipeline.extract().await?;
        println!(
            "Read {} rows ({} columns)",
            table.row_count(),
            table.column_count()
        );
        self.monitor.log_stats("extract");

        // Transform
        println!("Cleaning phone numbers...");
        let result = self.pipeline.transform(table).await?;
        println!("Kept {} of {} rows", result.rows.len(), result.scanned);
        self.monitor.log_stats("transform");

        // Load
        println!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_stats("load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
