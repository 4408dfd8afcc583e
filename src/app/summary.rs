use crate::http::ExecutionResult;
use crate::load::LoadReport;

pub(super) fn execution_lines(result: &ExecutionResult) -> Vec<String> {
    vec![
        format!("Status Code: {}", result.status),
        format!("Response Time: {:?}", result.latency),
        format!("Response Body: {}", result.body_text()),
    ]
}

pub(super) fn report_lines(report: &LoadReport) -> Vec<String> {
    let mut lines = vec![
        format!("Stress test finished in {:?}", report.elapsed),
        format!("Requests Launched: {}", report.launched),
        format!("Succeeded: {}", report.succeeded),
        format!("Failed: {}", report.failed()),
    ];
    if report.failed() > 0 {
        let failures = report.failures;
        lines.push(format!(
            "  build: {}, serialization: {}, network: {}, read: {}",
            failures.build, failures.serialization, failures.network, failures.read
        ));
    }
    lines.push(format!("Still In Flight: {}", report.in_flight()));
    lines
}

pub(super) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
