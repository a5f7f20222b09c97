//! Magic multipliers for the sliding-piece lookup tables.
//!
//! For every square, `(occupancy & mask) * MAGIC >> (64 - relevant_bits)` maps each
//! subset of the relevant occupancy mask to a slot holding the same attack set as a
//! ray walk over that occupancy. The constants were searched offline; a bad entry
//! silently corrupts lookups, so the exhaustive subset test in the parent module is
//! the only guard. Several entries are published dense magics that already work with
//! fewer index bits than the mask requires, which keeps them valid at full width.

pub(super) const ROOK_MAGICS: [u64; 64] = [
    0x4080_0020_4000_1480, // a1
    0x0040_0010_0140_2000, // b1
    0x0300_2000_1810_4100, // c1
    0x2100_0409_0110_0120, // d1
    0x8a00_0600_0408_2070, // e1
    0x0080_0144_0002_0080, // f1
    0x1100_2500_208a_0004, // g1
    0x0900_0042_2201_8100, // h1
    0x0208_8002_28c0_0081, // a2
    0x2280_4010_0340_2000, // b2
    0x0008_8010_0020_0184, // c2
    0x0001_0020_1000_0900, // d2
    0x0182_0006_0010_6008, // e2
    0x2058_8004_0080_0200, // f2
    0x0004_8002_0080_0900, // g2
    0x052d_0012_0040_a100, // h2
    0x0540_0880_0080_24c1, // a3
    0x2000_8480_4002_2000, // b3
    0x0400_4100_1100_6000, // c3
    0x0040_a100_3001_0108, // d3
    0x1204_8080_0800_0402, // e3
    0x0802_8080_0400_2201, // f3
    0x1002_8080_5200_0500, // g3
    0x0004_0a00_2112_4184, // h3
    0x0640_0128_8008_8040, // a4
    0x8410_4000_8020_008a, // b4
    0x0400_2008_8010_0080, // c4
    0x2001_0121_0009_1004, // d4
    0x1200_0d01_0008_0010, // e4
    0x6004_0004_0120_1008, // f4
    0x7500_aa04_0008_4110, // g4
    0x0100_0052_0004_0981, // h4
    0x0040_8040_0280_0020, // a5
    0x0470_0020_0640_0240, // b5
    0x0001_2000_8080_1000, // c5
    0x0000_0812_0200_2040, // d5
    0x00c0_8044_0080_0800, // e5
    0x9000_800a_0080_0400, // f5
    0x0001_0004_0100_0600, // g5
    0x0042_1088_ca00_2401, // h5
    0x0000_c000_228d_8000, // a6
    0x6410_0420_1440_4001, // b6
    0x1002_0040_8226_0014, // c6
    0x206a_0088_11c2_0021, // d6
    0x0002_0018_1022_0024, // e6
    0x2001_0200_0400_8080, // f6
    0x1000_0801_100c_001a, // g6
    0x0048_0082_5402_0011, // h6
    0x48ff_fe99_fecf_aa00, // a7
    0x48ff_fe99_fecf_aa00, // b7
    0x497f_ffad_ff9c_2e00, // c7
    0x613f_ffdd_ffce_9200, // d7
    0xffff_ffe9_ffe7_ce00, // e7
    0xffff_fff5_fff3_e600, // f7
    0x0003_ff95_e5e6_a4c0, // g7
    0x510f_fff5_f63c_96a0, // h7
    0xebff_ffb9_ff9f_c526, // a8
    0x61ff_fedd_feed_aeae, // b8
    0x53bf_ffed_ffde_b1a2, // c8
    0x127f_ffb9_ffdf_b5f6, // d8
    0x411f_ffdd_ffdb_f4d6, // e8
    0x0822_0024_0810_4502, // f8
    0x0003_ffef_27ee_be74, // g8
    0x7645_fffe_cbfe_a79e, // h8
];

pub(super) const BISHOP_MAGICS: [u64; 64] = [
    0xffed_f9fd_7cfc_ffff, // a1
    0xfc09_6285_4a77_f576, // b1
    0x0012_2808_c102_a004, // c1
    0x2851_2400_8240_0440, // d1
    0x0011_1040_1100_0202, // e1
    0x0008_2208_2000_0010, // f1
    0xfc0a_66c6_4a7e_f576, // g1
    0x7ffd_fdfc_bd79_ffff, // h1
    0xfc08_46a6_4a34_fff6, // a2
    0xfc08_7a87_4a3c_f7f6, // b2
    0x0009_8802_0420_a000, // c2
    0x8000_4404_0080_8200, // d2
    0x208c_8450_c001_3407, // e2
    0x1980_1105_2010_8030, // f2
    0xfc08_64ae_59b4_ff76, // g2
    0x3c08_60af_4b35_ff76, // h2
    0x73c0_1af5_6cf4_cffb, // a3
    0x41a0_1cfa_d64a_affc, // b3
    0x0604_0002_04a2_0202, // c3
    0x0002_8208_0602_4000, // d3
    0x008a_0024_2201_0201, // e3
    0x2082_0040_8801_0802, // f3
    0x7c0c_028f_5b34_ff76, // g3
    0xfc0a_028e_5ab4_df76, // h3
    0x0810_0420_d104_1080, // a4
    0x0904_5100_0210_0100, // b4
    0x0202_2808_0406_4403, // c4
    0x004c_0040_0c03_0082, // d4
    0x0602_0010_0200_5011, // e4
    0x7209_0200_c108_9000, // f4
    0x4211_4104_2400_8805, // g4
    0x0002_8484_2126_0804, // h4
    0xc001_0412_1121_2004, // a5
    0x0208_0188_0004_4800, // b5
    0x0080_2064_1058_0800, // c5
    0x0000_2011_0008_0084, // d5
    0x0208_0034_0009_4100, // e5
    0x2190_4102_0000_4058, // f5
    0x0188_8214_0180_8080, // g5
    0x2006_0a02_0000_c4c0, // h5
    0xdcef_d9b5_4bfc_c09f, // a6
    0xf95f_fa76_5afd_602b, // b6
    0x200a_1041_1000_2040, // c6
    0x0800_000c_0831_0c00, // d6
    0x0218_0401_0a01_0400, // e6
    0x1092_2004_0022_4100, // f6
    0x43ff_9a5c_f4ca_0c01, // g6
    0x4bff_cd8e_7c58_7601, // h6
    0xfc0f_f286_5334_f576, // a7
    0xfc0b_f6ce_5924_f576, // b7
    0x8052_2060_8c30_0001, // c7
    0x2084_1050_4202_0400, // d7
    0xe018_8010_2206_0220, // e7
    0x0001_1220_4901_0200, // f7
    0xc3ff_b7dc_36ca_8c89, // g7
    0xc3ff_8a54_f4ca_2c89, // h7
    0xffff_fcfc_fd79_edff, // a8
    0xfc08_63fc_cb14_7576, // b8
    0x40a0_0400_6213_3000, // c8
    0x0142_0280_0084_0400, // d8
    0x0009_0900_1006_1200, // e8
    0x0800_8445_2810_0308, // f8
    0xfc08_7e8e_4bb2_f736, // g8
    0x43ff_9e4e_f4ca_2c89, // h8
];
