use std::time::Duration;

use readafter_api::{Document, OpTime, ParseError};
use serde::Deserialize;
use serde::Serialize;

use crate::config::{ParserConfig, TimeoutScope};
use crate::fields;

/// Read-after-optime arguments of a command.
///
/// Built once by [`ReadAfterOpTimeArgs::parse`] and read-only afterwards.
/// The default value means "no read-after requested": null optime and
/// zero timeout. `requested` records whether the root field was present,
/// independently of the optime's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadAfterOpTimeArgs {
    requested: bool,
    op_time: OpTime,
    #[serde(rename = "timeout_ms", with = "millis")]
    timeout: Duration,
}

impl ReadAfterOpTimeArgs {
    /// Explicitly requested arguments, as if the root field were present.
    pub fn new(op_time: OpTime, timeout: Duration) -> Self {
        Self {
            requested: true,
            op_time,
            timeout,
        }
    }

    /// Parse with the default configuration (timeout inside the root).
    pub fn parse(cmd: &Document) -> Result<Self, ParseError> {
        Self::parse_with(cmd, &ParserConfig::default())
    }

    /// Parse the read-after arguments out of a command document.
    ///
    /// The root field is optional as a whole. Once present, `ot` and both
    /// of its leaves are required. The first violation is returned; the
    /// error's field path is rooted at the command document.
    pub fn parse_with(cmd: &Document, config: &ParserConfig) -> Result<Self, ParseError> {
        let result = Self::extract(cmd, config.timeout_scope);
        match &result {
            Ok(args) => tracing::debug!(
                op_time = %args.op_time,
                requested = args.requested,
                timeout_ms = u64::try_from(args.timeout.as_millis()).unwrap_or(u64::MAX),
                "parsed read-after arguments"
            ),
            Err(e) => tracing::debug!(error = %e, "rejected read-after arguments"),
        }
        result
    }

    fn extract(cmd: &Document, scope: TimeoutScope) -> Result<Self, ParseError> {
        let root = cmd.get_document(fields::ROOT)?;

        let op_time = match root {
            None => OpTime::default(),
            Some(root) => parse_op_time(root).map_err(|e| e.with_context(fields::ROOT))?,
        };

        let timeout = match (scope, root) {
            (TimeoutScope::ReadAfter, None) => Duration::ZERO,
            (TimeoutScope::ReadAfter, Some(root)) => {
                parse_timeout(root).map_err(|e| e.with_context(fields::ROOT))?
            }
            (TimeoutScope::Command, _) => parse_timeout(cmd)?,
        };

        Ok(Self {
            requested: root.is_some(),
            op_time,
            timeout,
        })
    }

    pub fn op_time(&self) -> OpTime {
        self.op_time
    }

    /// Zero when no timeout was given.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// True when the command opted into read-after-optime, i.e. the root
    /// field was present. A present root with a null timestamp still counts.
    pub fn is_set(&self) -> bool {
        self.requested
    }

    /// Render as the root sub-document: `{ ot: { ts, t }, timeout }`.
    ///
    /// Unset arguments render as an empty document; a zero timeout is omitted.
    pub fn to_document(&self) -> Document {
        if !self.is_set() {
            return Document::new();
        }
        let mut root = Document::new().append(fields::OP_TIME, self.op_time_document());
        if !self.timeout.is_zero() {
            root.push(fields::TIMEOUT, self.timeout_millis());
        }
        root
    }

    /// Attach these arguments to a command document so that
    /// [`ReadAfterOpTimeArgs::parse_with`] with the same scope reads them back.
    ///
    /// The root is written only when set. In command scope a non-zero
    /// timeout is written on its own, with or without the root; in
    /// read-after scope it can only travel inside the root.
    pub fn append_to(&self, cmd: &mut Document, scope: TimeoutScope) {
        match scope {
            TimeoutScope::ReadAfter => {
                if self.is_set() {
                    cmd.push(fields::ROOT, self.to_document());
                }
            }
            TimeoutScope::Command => {
                if self.is_set() {
                    cmd.push(
                        fields::ROOT,
                        Document::new().append(fields::OP_TIME, self.op_time_document()),
                    );
                }
                if !self.timeout.is_zero() {
                    cmd.push(fields::TIMEOUT, self.timeout_millis());
                }
            }
        }
    }

    fn op_time_document(&self) -> Document {
        Document::new()
            .append(fields::TIMESTAMP, self.op_time.timestamp())
            .append(fields::TERM, self.op_time.term())
    }

    fn timeout_millis(&self) -> i64 {
        i64::try_from(self.timeout.as_millis()).unwrap_or(i64::MAX)
    }
}

fn parse_op_time(root: &Document) -> Result<OpTime, ParseError> {
    let ot = root.require_document(fields::OP_TIME)?;
    let leaves = || -> Result<OpTime, ParseError> {
        let timestamp = ot.require_timestamp(fields::TIMESTAMP)?;
        let term = ot.require_integer(fields::TERM)?;
        Ok(OpTime::new(timestamp, term))
    };
    leaves().map_err(|e| e.with_context(fields::OP_TIME))
}

fn parse_timeout(doc: &Document) -> Result<Duration, ParseError> {
    let millis = doc.get_integer_or(fields::TIMEOUT, 0)?;
    if millis < 0 {
        return Err(ParseError::invalid(fields::TIMEOUT, "timeout must not be negative"));
    }
    Ok(Duration::from_millis(millis as u64))
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
