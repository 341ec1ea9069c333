//! Command execution coordinating the packaging pipeline.

mod package;

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;

pub use package::execute_package;

/// Execute the packaging run based on parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    let config = RuntimeConfig::from(&args);

    match execute_package(&config).await {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            config.error_println(&format!("Packaging failed: {}", e));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                config.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    config.println(&format!("  • {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}
