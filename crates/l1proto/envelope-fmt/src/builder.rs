use bitcoin::{
    Opcode,
    constants::MAX_SCRIPT_ELEMENT_SIZE,
    opcodes::{
        OP_FALSE,
        all::{OP_ENDIF, OP_IF},
    },
};
use xcp_l1_txfmt::script::{PushWidth, write_push};

use crate::ord::{ORD_MARKER, XCP_MARKER};

/// Builds envelope scripts byte by byte, so fixtures can use any push width
/// and mix in opcodes a consensus script builder would normalize away.
#[derive(Debug, Clone)]
pub struct EnvelopeScriptBuilder {
    script: Vec<u8>,
    width: PushWidth,
}

impl EnvelopeScriptBuilder {
    /// Starts a script with `OP_FALSE OP_IF`.
    pub fn new(width: PushWidth) -> Self {
        Self {
            script: vec![OP_FALSE.to_u8(), OP_IF.to_u8()],
            width,
        }
    }

    /// Appends a single push.
    pub fn push_bytes(mut self, data: &[u8]) -> Self {
        write_push(&mut self.script, data, self.width);
        self
    }

    /// Appends `payload` split into pushes no larger than the width allows.
    pub fn push_payload(mut self, payload: &[u8]) -> Self {
        let chunk_size = match self.width {
            PushWidth::PushData1 => u8::MAX as usize,
            _ => MAX_SCRIPT_ELEMENT_SIZE,
        };
        for chunk in payload.chunks(chunk_size) {
            write_push(&mut self.script, chunk, self.width);
        }
        self
    }

    /// Appends an opcode.
    pub fn push_opcode(mut self, opcode: Opcode) -> Self {
        self.script.push(opcode.to_u8());
        self
    }

    /// Appends raw script bytes.
    pub fn push_raw(mut self, bytes: &[u8]) -> Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Closes the envelope with `OP_ENDIF` and returns the script.
    pub fn build(mut self) -> Vec<u8> {
        self.script.push(OP_ENDIF.to_u8());
        self.script
    }
}

/// Builds `OP_FALSE OP_IF <payload chunks> OP_ENDIF`.
pub fn build_envelope_script(payload: &[u8], width: PushWidth) -> Vec<u8> {
    EnvelopeScriptBuilder::new(width)
        .push_payload(payload)
        .build()
}

/// Builds an ord envelope tagged with the `xcp` metaprotocol, with an
/// optional content body after the metadata.
pub fn build_ord_envelope_script(
    mime_type: &str,
    metadata: &[u8],
    content: Option<&[u8]>,
) -> Vec<u8> {
    let mut builder = EnvelopeScriptBuilder::new(PushWidth::Minimal)
        .push_bytes(ORD_MARKER)
        .push_bytes(&[7])
        .push_bytes(XCP_MARKER)
        .push_bytes(&[1])
        .push_bytes(mime_type.as_bytes())
        .push_bytes(&[5]);

    for chunk in metadata.chunks(u8::MAX as usize) {
        builder = builder.push_bytes(chunk);
    }

    if let Some(content) = content {
        builder = builder.push_opcode(OP_FALSE).push_payload(content);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use bitcoin::{Script, blockdata::script::Instruction::PushBytes};

    use super::*;

    /// Each expected vector starts with 0 because the leading `OP_FALSE` is
    /// an empty push when iterating instructions.
    #[test]
    fn test_payload_chunking() {
        let test_cases = vec![
            (0, vec![0]),
            (1, vec![0, 1]),
            (520, vec![0, 520]),
            (521, vec![0, 520, 1]),
            (1040, vec![0, 520, 520]),
            (2000, vec![0, 520, 520, 520, 440]),
        ];

        for (payload_size, expected_pushes) in test_cases {
            let payload: Vec<u8> = (0..payload_size).map(|i| (i % 256) as u8).collect();
            let script = build_envelope_script(&payload, PushWidth::Minimal);

            let data_pushes: Vec<_> = Script::from_bytes(&script)
                .instructions()
                .filter_map(|inst| match inst {
                    Ok(PushBytes(data)) => Some(data.len()),
                    _ => None,
                })
                .collect();

            assert_eq!(data_pushes, expected_pushes, "payload size {payload_size}");
        }
    }

    #[test]
    fn test_pushdata1_chunks_fit_one_byte_length() {
        let script = build_envelope_script(&[9; 600], PushWidth::PushData1);
        let data_pushes: Vec<_> = Script::from_bytes(&script)
            .instructions()
            .filter_map(|inst| match inst {
                Ok(PushBytes(data)) => Some(data.len()),
                _ => None,
            })
            .collect();

        assert_eq!(data_pushes, vec![0, 255, 255, 90]);
    }

    #[test]
    fn test_ord_script_layout() {
        let script = build_ord_envelope_script("a/b", &[0xa0], None);
        assert_eq!(
            script,
            vec![
                0x00, 0x63, 0x03, b'o', b'r', b'd', 0x01, 0x07, 0x03, b'x', b'c', b'p', 0x01,
                0x01, 0x03, b'a', b'/', b'b', 0x01, 0x05, 0x01, 0xa0, 0x68,
            ]
        );
    }
}
