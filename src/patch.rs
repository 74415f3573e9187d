use anyhow::{Context, Result};
use tracing::{info, instrument};

use std::path::{Path, PathBuf};

/// `dir/name.ext` becomes `dir/name.pat.ext`.
pub fn patched_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}.pat.{}", stem, ext.to_string_lossy()),
        None => format!("{}.pat", stem),
    };
    path.with_file_name(name)
}

/// Patch `path` with `account_id` and write the result next to it.
///
/// The input is never touched, and nothing is written unless the whole patch succeeded.
#[instrument]
pub fn patch_file(path: &Path, account_id: &str) -> Result<PathBuf> {
    let mut document = libqfx::parse_file(path)?;
    document
        .apply_account_patch(account_id)
        .with_context(|| format!("cannot patch `{}'", path.display()))?;

    let output = patched_path(path);
    libqfx::write_file(&output, &document)?;
    info!("wrote {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use crate::patch::{patch_file, patched_path};

    use anyhow::Result;

    use std::fs;
    use std::path::Path;

    #[test]
    fn output_path_keeps_extension() {
        assert_eq!(
            patched_path(Path::new("/exports/visa/2023-01.QFX")),
            Path::new("/exports/visa/2023-01.pat.QFX")
        );
        assert_eq!(patched_path(Path::new("export")), Path::new("export.pat"));
    }

    #[test]
    fn patch_writes_sibling_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("jan.qfx");
        let source = "OFXHEADER:100\n<OFX>\n<CREDITCARDMSGSRSV1>\n<CCSTMTTRNRS>\n<CCSTMTRS>\n\
                      <CCACCTFROM>\n</CCACCTFROM>\n<BANKTRANLIST>\n</BANKTRANLIST>\n\
                      </CCSTMTRS>\n</CCSTMTTRNRS>\n</CREDITCARDMSGSRSV1>\n</OFX>\n";
        fs::write(&input, source)?;

        let output = patch_file(&input, "77")?;
        assert_eq!(output, dir.path().join("jan.pat.qfx"));
        assert_eq!(fs::read_to_string(&input)?, source);
        assert!(fs::read_to_string(&output)?.contains("<CCACCTFROM>\n<ACCTID>77\n</CCACCTFROM>"));
        Ok(())
    }

    #[test]
    fn failed_patch_writes_nothing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("bank.qfx");
        fs::write(&input, "<OFX>\n<BANKMSGSRSV1>\n</BANKMSGSRSV1>\n</OFX>\n")?;

        let err = patch_file(&input, "77").unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            format!(
                "cannot patch `{}': key `CREDITCARDMSGSRSV1' not found in `OFX'",
                input.display()
            )
        );
        assert!(!dir.path().join("bank.pat.qfx").exists());
        Ok(())
    }
}
