/// What the decoder does with bytes that match none of the known forms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Fail with `VarIntError::Malformed`.
    Reject,
    /// Decode to zero, as the historical implementation did.
    Zero,
}

pub const DEFAULT_MALFORMED_POLICY: MalformedPolicy = MalformedPolicy::Reject;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    malformed: MalformedPolicy,
}

impl DecoderOptions {
    pub fn new() -> Self {
        DecoderOptions::default()
    }

    pub fn set_malformed_policy(&mut self, policy: MalformedPolicy) {
        self.malformed = policy;
    }

    pub fn malformed_policy(&self) -> MalformedPolicy {
        self.malformed
    }
}

impl Default for DecoderOptions {
    fn default() -> DecoderOptions {
        DecoderOptions { malformed: DEFAULT_MALFORMED_POLICY }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reject() {
        let opt = DecoderOptions::new();
        assert_eq!(opt.malformed_policy(), MalformedPolicy::Reject);

        let mut opt = opt;
        opt.set_malformed_policy(MalformedPolicy::Zero);
        assert_eq!(opt.malformed_policy(), MalformedPolicy::Zero);
    }
}
