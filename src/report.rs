//! 결과 내보내기
//!
//! 표 작성 결과와 스칼라 값을 한 줄에 한 레코드씩 구분자 텍스트로 쓴다.
//! 요약은 JSON으로 저장한다.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::math::laguerre::BasisSample;

/// 기본 구분자
pub const DEFAULT_SEPARATOR: &str = ",";

/// 구분자 텍스트 작성기
pub struct ReportWriter<W: Write> {
    inner: W,
    separator: String,
}

impl ReportWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).with_context(|| format!("출력 파일 생성 실패: {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// `t<sep>value` 레코드
    pub fn write_samples(&mut self, samples: &[BasisSample]) -> Result<()> {
        for sample in samples {
            writeln!(self.inner, "{}{}{}", sample.t, self.separator, sample.value)?;
        }
        Ok(())
    }

    /// 값 하나씩 한 줄
    pub fn write_values(&mut self, values: &[f64]) -> Result<()> {
        for value in values {
            writeln!(self.inner, "{}", value)?;
        }
        Ok(())
    }

    /// `name<sep>value` 레코드 (입력 순서 유지)
    pub fn write_named(&mut self, entries: &[(&str, f64)]) -> Result<()> {
        for (name, value) in entries {
            writeln!(self.inner, "{}{}{}", name, self.separator, value)?;
        }
        Ok(())
    }

    /// 버퍼를 비우고 내부 작성기 반환
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// 변환 실행 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformSummary {
    pub signal: String,
    pub beta: f64,
    pub sigma: f64,
    pub horizon: Option<f64>,
    pub coefficients: Vec<f64>,
    pub reconstructions: Vec<(f64, f64)>,
}

impl TransformSummary {
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).with_context(|| format!("요약 파일 생성 실패: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
