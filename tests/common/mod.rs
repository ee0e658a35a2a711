//! Shared test fixtures: real testnet funding proofs
//!
//! Each fixture is a complete SPV proof captured from Bitcoin testnet —
//! two confirming headers, the transaction's raw input/output vectors, and
//! its Merkle path. They are immutable constants consumed only by tests.

#![allow(dead_code)] // each test binary uses a subset of the fixtures

use spv_proof::{FundingProof, PaymentTarget};

/// The recipient script the fixtures were captured for: a testnet P2WPKH
/// output, compared byte-for-byte.
pub const TARGET_SCRIPT_HEX: &str = "001452441f867942deb3581fa0dc795662c67cedb594";

/// Minimum payment the fixture target expects, in satoshis.
pub const TARGET_MINIMUM: u64 = 1_000_000;

/// One complete funding proof, hex-encoded the way it was captured.
pub struct ProofFixture {
    pub headers: &'static str,
    pub merkle_proof: &'static str,
    pub version: &'static str,
    pub locktime: &'static str,
    pub tx_index: u64,
    pub input_vector: &'static str,
    pub output_vector: &'static str,
}

impl ProofFixture {
    pub fn funding_proof(&self) -> FundingProof {
        FundingProof {
            headers: decode(self.headers),
            merkle_proof: decode(self.merkle_proof),
            version: decode4(self.version),
            locktime: decode4(self.locktime),
            tx_index: self.tx_index,
            input_vector: decode(self.input_vector),
            output_vector: decode(self.output_vector),
        }
    }
}

/// Pays 1,000,000 satoshis to the target script.
/// Source: testnet tx d26a351e78761d7b624a60c43646bf9d89f31c8222d39de2554a9e5052969f7f
pub const RIGHT_PROOF: ProofFixture = ProofFixture {
    headers: "000000203e7cd1d6db385e8d9becbed75f2f115230857bf7f8311041cfd50000000000001f2979f3e18319de6f38b32231507e9a488e23c948a81691ecd2be390ac331eab8babb5dffff001bbf8ce0eb00e0ff3fd0fccf69562648a0a175fbd7651acaf37ea867c2e2bf10f402f0000000000000207c9fff5737e906fd03d59dae71e43672ec02404d5ba0da9490d7698f354d6593babb5dffff001b60ce6181",
    merkle_proof: "7074dc3d25ca0773dfd3f62964909bdbc1260ce9729edac7b94335fd4afd0b381346ce8832f52ef5087c02938225a6a75c28862031b0e341646357c4e635706f4569912095eb0da64b56febfd3339c91caa42f142df227c767e488af915d2f0c",
    version: "02000000",
    locktime: "b16f1800",
    tx_index: 5,
    input_vector: "01741c61de230511b42548f00e2bdf54ca8835d0fe9b81b33d2a9b7878bd73398e00000000171600144fa436db0da2e6fb49f12e542c352b4cbbd6f269feffffff",
    output_vector: "0240420f000000000016001452441f867942deb3581fa0dc795662c67cedb59491ac1300000000001600144887d1f957eeea5a77df2bf94bc9101e9896c470",
};

/// Expected txid of [`RIGHT_PROOF`] in natural (hashed) byte order.
pub const RIGHT_PROOF_TXID_HEX: &str =
    "7f9f9652509e4a55e29dd322821cf3899dbf4636c4604a627b1d76781e356ad2";

/// The same txid the way explorers display it, byte-reversed.
pub const RIGHT_PROOF_TXID_DISPLAY_HEX: &str =
    "d26a351e78761d7b624a60c43646bf9d89f31c8222d39de2554a9e5052969f7f";

/// Structurally valid proof of a transaction that pays two unrelated
/// scripts and never the target.
/// Source: testnet tx f0caf868042a1abfeb497f6216a440fbf0eca703c117defe12869339d0acc1f1
pub const WRONG_RECIPIENT_PROOF: ProofFixture = ProofFixture {
    headers: "00000020e132a0c6c3d18b33005f29a39210b14d7ce7dafd167dff42a1fa000000000000ced28805534d831504038dab205ac31cb9627deaaba1d02b46ccae0392c75f53d6babb5dffff001b068f803c000040203b14957684aff3272d47de8ee8df2bf21faa729996baffb51d6d000000000000a5afde3105a5e0b72070cd109396bf4f74f74a59c3fb29df65cc3e1a006e7946b4babb5dffff001bbc528937",
    merkle_proof: "3f4d585a4a60485e04c4e18a5e90da696ce8d8a4255af0b0e64bda3ac23db4297ee347fce433c707ced9c9737e01ab4a102c6af07d5a22b9398bb64023a67463d4a4650048e81e2e7aa1d48d7e89b25a4006c12a6d0e1a1568beafdcd5bf11da4bb5e8046c94109be3a5bf8401f607d01c8118556f8d24c45481832623945ecd",
    version: "02000000",
    locktime: "b36f1800",
    tx_index: 2,
    input_vector: "027f9f9652509e4a55e29dd322821cf3899dbf4636c4604a627b1d76781e356ad20100000000feffffff8fe116f0c89fe217199223d249abd8533537ceec7cc9c32277a9a792d6b956c8010000001716001484292d352d50ca4edeaeda18b04d5a3b3666fe44feffffff",
    output_vector: "0240420f000000000016001404465340d248af2711cf0dc1971143017b59ce9f87041800000000001600141c0d1989b3fe9293d6fa1e95358d149e5b2aec36",
};

/// Structurally valid proof of a transaction that pays the target script
/// only 17,000 satoshis.
/// Source: testnet tx 3025bd85d0b4473171c2269c9a7c3c663168e5f2b7bd4e51fb316927584ed59e
pub const WRONG_AMOUNT_PROOF: ProofFixture = ProofFixture {
    headers: "00000020e132a0c6c3d18b33005f29a39210b14d7ce7dafd167dff42a1fa000000000000ced28805534d831504038dab205ac31cb9627deaaba1d02b46ccae0392c75f53d6babb5dffff001b068f803c000040203b14957684aff3272d47de8ee8df2bf21faa729996baffb51d6d000000000000a5afde3105a5e0b72070cd109396bf4f74f74a59c3fb29df65cc3e1a006e7946b4babb5dffff001bbc528937",
    merkle_proof: "c737b0b3470e8356d6d69cabdcca441ace6dda3bac3b0b005b2f763ac72b0438ec7600227acaa5c112edb57ef0af05d2cecd49dfa8447ee4c4279d9602c0fe5fd4a4650048e81e2e7aa1d48d7e89b25a4006c12a6d0e1a1568beafdcd5bf11da4bb5e8046c94109be3a5bf8401f607d01c8118556f8d24c45481832623945ecd",
    version: "02000000",
    locktime: "b56f1800",
    tx_index: 1,
    input_vector: "01e11812511b34dc3099e8c3095a15a2d597c4d9584b5bf0d744f239a1d25e03cf01000000171600141bc73fec67b4af381538673b52c92e796de0ae04feffffff",
    output_vector: "02684200000000000016001452441f867942deb3581fa0dc795662c67cedb59448e1d9c701000000160014f17db91e9e0d6e70be7cd5729c4e065902cfac3a",
};

/// Amount the wrong-amount fixture actually pays the target.
pub const WRONG_AMOUNT_PAID: u64 = 17_000;

pub fn target() -> PaymentTarget {
    PaymentTarget {
        script_pubkey: decode(TARGET_SCRIPT_HEX),
        minimum_value: TARGET_MINIMUM,
    }
}

pub fn decode(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).unwrap()
}

pub fn decode32(hex_str: &str) -> [u8; 32] {
    decode(hex_str).try_into().unwrap()
}

pub fn decode4(hex_str: &str) -> [u8; 4] {
    decode(hex_str).try_into().unwrap()
}
