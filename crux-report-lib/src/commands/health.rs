use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::client::HealthStatus;
use clap::Parser;
use ohno::{IntoAppError, app_err};
use std::io::Write;

/// Status reported by a service that is up and ready.
const HEALTHY: &str = "healthy";

#[derive(Parser, Debug)]
pub struct HealthArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn check_health<H: Host>(host: &mut H, args: &HealthArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let client = common.client()?;

    let health = match client.health().await {
        Ok(health) => health,
        Err(e) => {
            common.fail(&e);
            return Err(e).into_app_err_with(|| format!("checking service health at {}", client.base_url()));
        }
    };

    let mut output = String::new();
    generate(client.base_url(), &health, &mut output)?;
    let _ = write!(common.output(), "{output}");

    if health.status != HEALTHY {
        common.fail(format!("service reported status '{}'", health.status));
        return Err(app_err!("service at {} is not healthy", client.base_url()));
    }

    Ok(())
}

fn generate<W: core::fmt::Write>(base_url: &str, health: &HealthStatus, writer: &mut W) -> Result<()> {
    writeln!(writer, "Service at {base_url}: {}", health.status)?;

    if let Some(version) = &health.version {
        writeln!(writer, "  version : {version}")?;
    }

    if let Some(timestamp) = &health.timestamp {
        writeln!(writer, "  as of   : {timestamp}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_full() {
        let health = HealthStatus {
            status: "healthy".into(),
            timestamp: Some("2024-03-01T08:00:00Z".into()),
            version: Some("1.0.0".into()),
        };

        let mut output = String::new();
        generate("http://localhost:8000/api", &health, &mut output).unwrap();

        insta::assert_snapshot!(output.trim_end(), @r###"
        Service at http://localhost:8000/api: healthy
          version : 1.0.0
          as of   : 2024-03-01T08:00:00Z
        "###);
    }

    #[test]
    fn test_generate_status_only() {
        let health = HealthStatus {
            status: "degraded".into(),
            timestamp: None,
            version: None,
        };

        let mut output = String::new();
        generate("http://svc", &health, &mut output).unwrap();
        assert_eq!(output, "Service at http://svc: degraded\n");
    }
}
