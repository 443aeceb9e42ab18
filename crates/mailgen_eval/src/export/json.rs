use mailgen_core::evaluation::EvaluationRecord;

pub(crate) fn export_to_json_impl(
    records: &[EvaluationRecord],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(file, records)?;
    Ok(())
}
