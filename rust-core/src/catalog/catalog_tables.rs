// Raw catalog tables: (n_c, Hermann-Mauguin symbol, Hall symbol)

/// One raw catalog entry: `(n_c, HM, Hall)`.
pub type RawRow = (&'static str, &'static str, &'static str);

/// The 32 crystallographic point groups in 45 settings.
#[rustfmt::skip]
pub const POINT_GROUP_TABLE: &[RawRow] = &[
    ("1", "1", "P 1"),
    ("2", "-1", "-P 1"),
    ("3:b", "121", "P 2y"),
    ("3:c", "112", "P 2"),
    ("3:a", "211", "P 2x"),
    ("4:b", "1m1", "P -2y"),
    ("4:c", "11m", "P -2"),
    ("4:a", "m11", "P -2x"),
    ("5:b", "12/m1", "-P 2y"),
    ("5:c", "112/m", "-P 2"),
    ("5:a", "2/m11", "-P 2x"),
    ("6", "222", "P 2 2"),
    ("7:c", "mm2", "P 2 -2"),
    ("7:a", "2mm", "P 2x -2y"),
    ("7:b", "m2m", "P 2y -2x"),
    ("8", "mmm", "-P 2 2"),
    ("9", "4", "P 4"),
    ("10", "-4", "P -4"),
    ("11", "4/m", "-P 4"),
    ("12", "422", "P 4 2"),
    ("13", "4mm", "P 4 -2"),
    ("14:1", "-42m", "P -4 2"),
    ("14:2", "-4m2", "P -4 -2"),
    ("15", "4/mmm", "-P 4 2"),
    ("16", "3", "P 3"),
    ("17", "-3", "-P 3"),
    ("18:1", "321", "P 3 2\""),
    ("18:2", "312", "P 3 2"),
    ("19:1", "3m1", "P 3 -2\""),
    ("19:2", "31m", "P 3 -2"),
    ("20:1", "-3m1", "-P 3 2\""),
    ("20:2", "-31m", "-P 3 2"),
    ("21", "6", "P 6"),
    ("22", "-6", "P -6"),
    ("23", "6/m", "-P 6"),
    ("24", "622", "P 6 2"),
    ("25", "6mm", "P 6 -2"),
    ("26:1", "-6m2", "P -6 2"),
    ("26:2", "-62m", "P -6 -2"),
    ("27", "6/mmm", "-P 6 2"),
    ("28", "23", "P 2 2 3"),
    ("29", "m-3", "-P 2 2 3"),
    ("30", "432", "P 4 2 3"),
    ("31", "-43m", "P -4 2 3"),
    ("32", "m-3m", "-P 4 2 3"),
];

/// The 230 space-group types in 300 settings.
#[rustfmt::skip]
pub const SPACE_GROUP_TABLE: &[RawRow] = &[
    ("1", "P1", "P 1"),
    ("2", "P-1", "-P 1"),
    ("3:b", "P121", "P 2y"),
    ("3:c", "P112", "P 2"),
    ("3:a", "P211", "P 2x"),
    ("4:b", "P12_11", "P 2yb"),
    ("4:c", "P112_1", "P 2c"),
    ("4:a", "P2_111", "P 2xa"),
    ("5:b1", "C121", "C 2y"),
    ("5:b3", "I121", "I 2y"),
    ("5:c1", "A112", "A 2"),
    ("5:a1", "B211", "B 2x"),
    ("6:b", "P1m1", "P -2y"),
    ("6:c", "P11m", "P -2"),
    ("6:a", "Pm11", "P -2x"),
    ("7:b1", "P1c1", "P -2yc"),
    ("7:b2", "P1n1", "P -2yac"),
    ("7:b3", "P1a1", "P -2ya"),
    ("7:c1", "P11a", "P -2a"),
    ("7:a1", "Pb11", "P -2xb"),
    ("8:b1", "C1m1", "C -2y"),
    ("8:b3", "I1m1", "I -2y"),
    ("8:c1", "A11m", "A -2"),
    ("8:a1", "Bm11", "B -2x"),
    ("9:b1", "C1c1", "C -2yc"),
    ("9:b2", "A1n1", "A -2yac"),
    ("9:b3", "I1a1", "I -2ya"),
    ("9:c1", "A11a", "A -2a"),
    ("9:a1", "Bb11", "B -2xb"),
    ("10:b", "P12/m1", "-P 2y"),
    ("10:c", "P112/m", "-P 2"),
    ("10:a", "P2/m11", "-P 2x"),
    ("11:b", "P12_1/m1", "-P 2yb"),
    ("11:c", "P112_1/m", "-P 2c"),
    ("11:a", "P2_1/m11", "-P 2xa"),
    ("12:b1", "C12/m1", "-C 2y"),
    ("12:b3", "I12/m1", "-I 2y"),
    ("12:c1", "A112/m", "-A 2"),
    ("12:a1", "B2/m11", "-B 2x"),
    ("13:b1", "P12/c1", "-P 2yc"),
    ("13:b2", "P12/n1", "-P 2yac"),
    ("13:b3", "P12/a1", "-P 2ya"),
    ("13:c1", "P112/a", "-P 2a"),
    ("13:a1", "P2/b11", "-P 2xb"),
    ("14:b1", "P12_1/c1", "-P 2ybc"),
    ("14:b2", "P12_1/n1", "-P 2yn"),
    ("14:b3", "P12_1/a1", "-P 2yab"),
    ("14:c1", "P112_1/a", "-P 2ac"),
    ("14:a1", "P2_1/b11", "-P 2xab"),
    ("15:b1", "C12/c1", "-C 2yc"),
    ("15:b2", "A12/n1", "-A 2yac"),
    ("15:b3", "I12/a1", "-I 2ya"),
    ("15:c1", "A112/a", "-A 2a"),
    ("15:a1", "B2/b11", "-B 2xb"),
    ("16", "P222", "P 2 2"),
    ("17", "P222_1", "P 2c 2"),
    ("18", "P2_12_12", "P 2 2ab"),
    ("19", "P2_12_12_1", "P 2ac 2ab"),
    ("20", "C222_1", "C 2c 2"),
    ("21", "C222", "C 2 2"),
    ("22", "F222", "F 2 2"),
    ("23", "I222", "I 2 2"),
    ("24", "I2_12_12_1", "I 2b 2c"),
    ("25", "Pmm2", "P 2 -2"),
    ("26", "Pmc2_1", "P 2c -2"),
    ("27", "Pcc2", "P 2 -2c"),
    ("28", "Pma2", "P 2 -2a"),
    ("29", "Pca2_1", "P 2c -2ac"),
    ("30", "Pnc2", "P 2 -2bc"),
    ("31", "Pmn2_1", "P 2ac -2"),
    ("32", "Pba2", "P 2 -2ab"),
    ("33", "Pna2_1", "P 2c -2n"),
    ("34", "Pnn2", "P 2 -2n"),
    ("35", "Cmm2", "C 2 -2"),
    ("36", "Cmc2_1", "C 2c -2"),
    ("37", "Ccc2", "C 2 -2c"),
    ("38", "Amm2", "A 2 -2"),
    ("39", "Aem2", "A 2 -2c"),
    ("40", "Ama2", "A 2 -2a"),
    ("41", "Aea2", "A 2 -2ac"),
    ("42", "Fmm2", "F 2 -2"),
    ("43", "Fdd2", "F 2 -2d"),
    ("44", "Imm2", "I 2 -2"),
    ("45", "Iba2", "I 2 -2c"),
    ("46", "Ima2", "I 2 -2a"),
    ("47", "Pmmm", "-P 2 2"),
    ("48:1", "Pnnn:1", "P 2 2 -1n"),
    ("48:2", "Pnnn:2", "-P 2ab 2bc"),
    ("49", "Pccm", "-P 2 2c"),
    ("50:1", "Pban:1", "P 2 2 -1ab"),
    ("50:2", "Pban:2", "-P 2ab 2b"),
    ("51", "Pmma", "-P 2a 2a"),
    ("52", "Pnna", "-P 2a 2bc"),
    ("53", "Pmna", "-P 2ac 2"),
    ("54", "Pcca", "-P 2a 2ac"),
    ("55", "Pbam", "-P 2 2ab"),
    ("56", "Pccn", "-P 2ab 2ac"),
    ("57", "Pbcm", "-P 2c 2b"),
    ("58", "Pnnm", "-P 2 2n"),
    ("59:1", "Pmmn:1", "P 2 2ab -1ab"),
    ("59:2", "Pmmn:2", "-P 2ab 2a"),
    ("60", "Pbcn", "-P 2n 2ab"),
    ("61", "Pbca", "-P 2ac 2ab"),
    ("62", "Pnma", "-P 2ac 2n"),
    ("63", "Cmcm", "-C 2c 2"),
    ("64", "Cmce", "-C 2bc 2"),
    ("65", "Cmmm", "-C 2 2"),
    ("66", "Cccm", "-C 2 2c"),
    ("67", "Cmme", "-C 2b 2"),
    ("68:1", "Ccce:1", "C 2 2 -1bc"),
    ("68:2", "Ccce:2", "-C 2b 2bc"),
    ("69", "Fmmm", "-F 2 2"),
    ("70:1", "Fddd:1", "F 2 2 -1d"),
    ("70:2", "Fddd:2", "-F 2uv 2vw"),
    ("71", "Immm", "-I 2 2"),
    ("72", "Ibam", "-I 2 2c"),
    ("73", "Ibca", "-I 2b 2c"),
    ("74", "Imma", "-I 2b 2"),
    ("75", "P4", "P 4"),
    ("76", "P4_1", "P 4w"),
    ("77", "P4_2", "P 4c"),
    ("78", "P4_3", "P 4cw"),
    ("79", "I4", "I 4"),
    ("80", "I4_1", "I 4bw"),
    ("81", "P-4", "P -4"),
    ("82", "I-4", "I -4"),
    ("83", "P4/m", "-P 4"),
    ("84", "P4_2/m", "-P 4c"),
    ("85:1", "P4/n:1", "P 4ab -1ab"),
    ("85:2", "P4/n:2", "-P 4a"),
    ("86:1", "P4_2/n:1", "P 4n -1n"),
    ("86:2", "P4_2/n:2", "-P 4bc"),
    ("87", "I4/m", "-I 4"),
    ("88:1", "I4_1/a:1", "I 4bw -1bw"),
    ("88:2", "I4_1/a:2", "-I 4ad"),
    ("89", "P422", "P 4 2"),
    ("90", "P42_12", "P 4ab 2ab"),
    ("91", "P4_122", "P 4w 2c"),
    ("92", "P4_12_12", "P 4abw 2nw"),
    ("93", "P4_222", "P 4c 2"),
    ("94", "P4_22_12", "P 4n 2n"),
    ("95", "P4_322", "P 4cw 2c"),
    ("96", "P4_32_12", "P 4nw 2abw"),
    ("97", "I422", "I 4 2"),
    ("98", "I4_122", "I 4bw 2bw"),
    ("99", "P4mm", "P 4 -2"),
    ("100", "P4bm", "P 4 -2ab"),
    ("101", "P4_2cm", "P 4c -2c"),
    ("102", "P4_2nm", "P 4n -2n"),
    ("103", "P4cc", "P 4 -2c"),
    ("104", "P4nc", "P 4 -2n"),
    ("105", "P4_2mc", "P 4c -2"),
    ("106", "P4_2bc", "P 4c -2ab"),
    ("107", "I4mm", "I 4 -2"),
    ("108", "I4cm", "I 4 -2c"),
    ("109", "I4_1md", "I 4bw -2"),
    ("110", "I4_1cd", "I 4bw -2c"),
    ("111", "P-42m", "P -4 2"),
    ("112", "P-42c", "P -4 2c"),
    ("113", "P-42_1m", "P -4 2ab"),
    ("114", "P-42_1c", "P -4 2n"),
    ("115", "P-4m2", "P -4 -2"),
    ("116", "P-4c2", "P -4 -2c"),
    ("117", "P-4b2", "P -4 -2ab"),
    ("118", "P-4n2", "P -4 -2n"),
    ("119", "I-4m2", "I -4 -2"),
    ("120", "I-4c2", "I -4 -2c"),
    ("121", "I-42m", "I -4 2"),
    ("122", "I-42d", "I -4 2bw"),
    ("123", "P4/mmm", "-P 4 2"),
    ("124", "P4/mcc", "-P 4 2c"),
    ("125:1", "P4/nbm:1", "P 4 2 -1ab"),
    ("125:2", "P4/nbm:2", "-P 4a 2b"),
    ("126:1", "P4/nnc:1", "P 4 2 -1n"),
    ("126:2", "P4/nnc:2", "-P 4a 2bc"),
    ("127", "P4/mbm", "-P 4 2ab"),
    ("128", "P4/mnc", "-P 4 2n"),
    ("129:1", "P4/nmm:1", "P 4ab 2ab -1ab"),
    ("129:2", "P4/nmm:2", "-P 4a 2a"),
    ("130:1", "P4/ncc:1", "P 4ab 2n -1ab"),
    ("130:2", "P4/ncc:2", "-P 4a 2ac"),
    ("131", "P4_2/mmc", "-P 4c 2"),
    ("132", "P4_2/mcm", "-P 4c 2c"),
    ("133:1", "P4_2/nbc:1", "P 4n 2c -1n"),
    ("133:2", "P4_2/nbc:2", "-P 4ac 2b"),
    ("134:1", "P4_2/nnm:1", "P 4n 2 -1n"),
    ("134:2", "P4_2/nnm:2", "-P 4ac 2bc"),
    ("135", "P4_2/mbc", "-P 4c 2ab"),
    ("136", "P4_2/mnm", "-P 4n 2n"),
    ("137:1", "P4_2/nmc:1", "P 4n 2n -1n"),
    ("137:2", "P4_2/nmc:2", "-P 4ac 2a"),
    ("138:1", "P4_2/ncm:1", "P 4n 2ab -1n"),
    ("138:2", "P4_2/ncm:2", "-P 4ac 2ac"),
    ("139", "I4/mmm", "-I 4 2"),
    ("140", "I4/mcm", "-I 4 2c"),
    ("141:1", "I4_1/amd:1", "I 4bw 2bw -1bw"),
    ("141:2", "I4_1/amd:2", "-I 4bd 2"),
    ("142:1", "I4_1/acd:1", "I 4bw 2aw -1bw"),
    ("142:2", "I4_1/acd:2", "-I 4bd 2c"),
    ("143", "P3", "P 3"),
    ("144", "P3_1", "P 31"),
    ("145", "P3_2", "P 32"),
    ("146:H", "R3:H", "R 3"),
    ("146:R", "R3:R", "P 3*"),
    ("147", "P-3", "-P 3"),
    ("148:H", "R-3:H", "-R 3"),
    ("148:R", "R-3:R", "-P 3*"),
    ("149", "P312", "P 3 2"),
    ("150", "P321", "P 3 2\""),
    ("151", "P3_112", "P 31 2c (0 0 1)"),
    ("152", "P3_121", "P 31 2\""),
    ("153", "P3_212", "P 32 2c (0 0 -1)"),
    ("154", "P3_221", "P 32 2\""),
    ("155:H", "R32:H", "R 3 2\""),
    ("155:R", "R32:R", "P 3* 2"),
    ("156", "P3m1", "P 3 -2\""),
    ("157", "P31m", "P 3 -2"),
    ("158", "P3c1", "P 3 -2\"c"),
    ("159", "P31c", "P 3 -2c"),
    ("160:H", "R3m:H", "R 3 -2\""),
    ("160:R", "R3m:R", "P 3* -2"),
    ("161:H", "R3c:H", "R 3 -2\"c"),
    ("161:R", "R3c:R", "P 3* -2n"),
    ("162", "P-31m", "-P 3 2"),
    ("163", "P-31c", "-P 3 2c"),
    ("164", "P-3m1", "-P 3 2\""),
    ("165", "P-3c1", "-P 3 2\"c"),
    ("166:H", "R-3m:H", "-R 3 2\""),
    ("166:R", "R-3m:R", "-P 3* 2"),
    ("167:H", "R-3c:H", "-R 3 2\"c"),
    ("167:R", "R-3c:R", "-P 3* 2n"),
    ("168", "P6", "P 6"),
    ("169", "P6_1", "P 61"),
    ("170", "P6_5", "P 65"),
    ("171", "P6_2", "P 62"),
    ("172", "P6_4", "P 64"),
    ("173", "P6_3", "P 6c"),
    ("174", "P-6", "P -6"),
    ("175", "P6/m", "-P 6"),
    ("176", "P6_3/m", "-P 6c"),
    ("177", "P622", "P 6 2"),
    ("178", "P6_122", "P 61 2 (0 0 -1)"),
    ("179", "P6_522", "P 65 2 (0 0 1)"),
    ("180", "P6_222", "P 62 2c (0 0 1)"),
    ("181", "P6_422", "P 64 2c (0 0 -1)"),
    ("182", "P6_322", "P 6c 2c"),
    ("183", "P6mm", "P 6 -2"),
    ("184", "P6cc", "P 6 -2c"),
    ("185", "P6_3cm", "P 6c -2"),
    ("186", "P6_3mc", "P 6c -2c"),
    ("187", "P-6m2", "P -6 2"),
    ("188", "P-6c2", "P -6c 2"),
    ("189", "P-62m", "P -6 -2"),
    ("190", "P-62c", "P -6c -2c"),
    ("191", "P6/mmm", "-P 6 2"),
    ("192", "P6/mcc", "-P 6 2c"),
    ("193", "P6_3/mcm", "-P 6c 2"),
    ("194", "P6_3/mmc", "-P 6c 2c"),
    ("195", "P23", "P 2 2 3"),
    ("196", "F23", "F 2 2 3"),
    ("197", "I23", "I 2 2 3"),
    ("198", "P2_13", "P 2ac 2ab 3"),
    ("199", "I2_13", "I 2b 2c 3"),
    ("200", "Pm-3", "-P 2 2 3"),
    ("201:1", "Pn-3:1", "P 2 2 3 -1n"),
    ("201:2", "Pn-3:2", "-P 2ab 2bc 3"),
    ("202", "Fm-3", "-F 2 2 3"),
    ("203:1", "Fd-3:1", "F 2 2 3 -1d"),
    ("203:2", "Fd-3:2", "-F 2uv 2vw 3"),
    ("204", "Im-3", "-I 2 2 3"),
    ("205", "Pa-3", "-P 2ac 2ab 3"),
    ("206", "Ia-3", "-I 2b 2c 3"),
    ("207", "P432", "P 4 2 3"),
    ("208", "P4_232", "P 4n 2 3"),
    ("209", "F432", "F 4 2 3"),
    ("210", "F4_132", "F 4d 2 3"),
    ("211", "I432", "I 4 2 3"),
    ("212", "P4_332", "P 4acd 2ab 3"),
    ("213", "P4_132", "P 4bd 2ab 3"),
    ("214", "I4_132", "I 4bd 2c 3"),
    ("215", "P-43m", "P -4 2 3"),
    ("216", "F-43m", "F -4 2 3"),
    ("217", "I-43m", "I -4 2 3"),
    ("218", "P-43n", "P -4n 2 3"),
    ("219", "F-43c", "F -4c 2 3"),
    ("220", "I-43d", "I -4bd 2c 3"),
    ("221", "Pm-3m", "-P 4 2 3"),
    ("222:1", "Pn-3n:1", "P 4 2 3 -1n"),
    ("222:2", "Pn-3n:2", "-P 4a 2bc 3"),
    ("223", "Pm-3n", "-P 4n 2 3"),
    ("224:1", "Pn-3m:1", "P 4n 2 3 -1n"),
    ("224:2", "Pn-3m:2", "-P 4bc 2bc 3"),
    ("225", "Fm-3m", "-F 4 2 3"),
    ("226", "Fm-3c", "-F 4c 2 3"),
    ("227:1", "Fd-3m:1", "F 4d 2 3 -1d"),
    ("227:2", "Fd-3m:2", "-F 4vw 2vw 3"),
    ("228:1", "Fd-3c:1", "F 4d 2 3 -1cd"),
    ("228:2", "Fd-3c:2", "-F 4cvw 2vw 3"),
    ("229", "Im-3m", "-I 4 2 3"),
    ("230", "Ia-3d", "-I 4bd 2c 3"),
];
