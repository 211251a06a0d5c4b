// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Standard version descriptors reported in standard INQUIRY data
//! (SPC-5 Annex E, t10.org stds-num list).

use crate::catalog::SimpleEntry;

pub(crate) static VERSION_DESCRIPTOR_NAMES: &[SimpleEntry] = &[
    SimpleEntry::new(0x0000, "Version Descriptor not supported or No standard identified"),
    SimpleEntry::new(0x0020, "SAM (no version claimed)"),
    SimpleEntry::new(0x003b, "SAM T10/0994-D revision 18"),
    SimpleEntry::new(0x003c, "SAM INCITS 270-1996"),
    SimpleEntry::new(0x003d, "SAM ISO/IEC 14776-411"),
    SimpleEntry::new(0x0040, "SAM-2 (no version claimed)"),
    SimpleEntry::new(0x0054, "SAM-2 T10/1157-D revision 23"),
    SimpleEntry::new(0x0055, "SAM-2 T10/1157-D revision 24"),
    SimpleEntry::new(0x005c, "SAM-2 INCITS 366-2003"),
    SimpleEntry::new(0x005e, "SAM-2 ISO/IEC 14776-412"),
    SimpleEntry::new(0x0060, "SAM-3 (no version claimed)"),
    SimpleEntry::new(0x0062, "SAM-3 T10/1561-D revision 7"),
    SimpleEntry::new(0x0075, "SAM-3 T10/1561-D revision 13"),
    SimpleEntry::new(0x0076, "SAM-3 T10/1561-D revision 14"),
    SimpleEntry::new(0x0077, "SAM-3 INCITS 402-2005"),
    SimpleEntry::new(0x0079, "SAM-3 ISO/IEC 14776-413"),
    SimpleEntry::new(0x0080, "SAM-4 (no version claimed)"),
    SimpleEntry::new(0x0087, "SAM-4 T10/1683-D revision 13"),
    SimpleEntry::new(0x008b, "SAM-4 T10/1683-D revision 14"),
    SimpleEntry::new(0x0090, "SAM-4 INCITS 447-2008"),
    SimpleEntry::new(0x0092, "SAM-4 ISO/IEC 14776-414"),
    SimpleEntry::new(0x00a0, "SAM-5 (no version claimed)"),
    SimpleEntry::new(0x00a2, "SAM-5 T10/2104-D revision 4"),
    SimpleEntry::new(0x00a4, "SAM-5 T10/2104-D revision 20"),
    SimpleEntry::new(0x00a6, "SAM-5 T10/2104-D revision 21"),
    SimpleEntry::new(0x00a8, "SAM-5 INCITS 515-2016"),
    SimpleEntry::new(0x00aa, "SAM-5 ISO/IEC 14776-415"),
    SimpleEntry::new(0x00c0, "SAM-6 (no version claimed)"),
    SimpleEntry::new(0x00c2, "SAM-6 INCITS 546-2021"),
    SimpleEntry::new(0x00d4, "SAM-6 BSR INCITS 546 revision 10"),
    SimpleEntry::new(0x0120, "SPC (no version claimed)"),
    SimpleEntry::new(0x013b, "SPC T10/0995-D revision 11a"),
    SimpleEntry::new(0x013c, "SPC INCITS 301-1997"),
    SimpleEntry::new(0x0140, "MMC (no version claimed)"),
    SimpleEntry::new(0x015b, "MMC T10/1048-D revision 10a"),
    SimpleEntry::new(0x015c, "MMC INCITS 304-1997"),
    SimpleEntry::new(0x0160, "SCC (no version claimed)"),
    SimpleEntry::new(0x017b, "SCC T10/1047-D revision 06c"),
    SimpleEntry::new(0x017c, "SCC INCITS 276-1997"),
    SimpleEntry::new(0x0180, "SBC (no version claimed)"),
    SimpleEntry::new(0x019b, "SBC T10/0996-D revision 08c"),
    SimpleEntry::new(0x019c, "SBC INCITS 306-1998"),
    SimpleEntry::new(0x019e, "SBC ISO/IEC 14776-321"),
    SimpleEntry::new(0x01a0, "SMC (no version claimed)"),
    SimpleEntry::new(0x01bb, "SMC T10/0999-D revision 10a"),
    SimpleEntry::new(0x01bc, "SMC INCITS 314-1998"),
    SimpleEntry::new(0x01be, "SMC ISO/IEC 14776-351"),
    SimpleEntry::new(0x01c0, "SES (no version claimed)"),
    SimpleEntry::new(0x01db, "SES T10/1212-D revision 08b"),
    SimpleEntry::new(0x01dc, "SES INCITS 305-1998"),
    SimpleEntry::new(0x01dd, "SES T10/1212 revision 08b w/ Amendment INCITS 305/AM1-2000"),
    SimpleEntry::new(0x01de, "SES INCITS 305-1998 w/ Amendment INCITS 305/AM1-2000"),
    SimpleEntry::new(0x01e0, "SCC-2 (no version claimed)"),
    SimpleEntry::new(0x01fb, "SCC-2 T10/1125-D revision 04"),
    SimpleEntry::new(0x01fc, "SCC-2 INCITS 318-1998"),
    SimpleEntry::new(0x0200, "SSC (no version claimed)"),
    SimpleEntry::new(0x0201, "SSC T10/0997-D revision 17"),
    SimpleEntry::new(0x0207, "SSC T10/0997-D revision 22"),
    SimpleEntry::new(0x021c, "SSC INCITS 335-2000"),
    SimpleEntry::new(0x021e, "SSC ISO/IEC 14776-331"),
    SimpleEntry::new(0x0220, "RBC (no version claimed)"),
    SimpleEntry::new(0x0238, "RBC T10/1240-D revision 10a"),
    SimpleEntry::new(0x023c, "RBC INCITS 330-2000"),
    SimpleEntry::new(0x023e, "RBC ISO/IEC 14776-326"),
    SimpleEntry::new(0x0240, "MMC-2 (no version claimed)"),
    SimpleEntry::new(0x0255, "MMC-2 T10/1228-D revision 11"),
    SimpleEntry::new(0x025b, "MMC-2 T10/1228-D revision 11a"),
    SimpleEntry::new(0x025c, "MMC-2 INCITS 333-2000"),
    SimpleEntry::new(0x0260, "SPC-2 (no version claimed)"),
    SimpleEntry::new(0x0267, "SPC-2 T10/1236-D revision 12"),
    SimpleEntry::new(0x0269, "SPC-2 T10/1236-D revision 18"),
    SimpleEntry::new(0x0275, "SPC-2 T10/1236-D revision 19"),
    SimpleEntry::new(0x0276, "SPC-2 T10/1236-D revision 20"),
    SimpleEntry::new(0x0277, "SPC-2 INCITS 351-2001"),
    SimpleEntry::new(0x0278, "SPC-2 ISO/IEC 14776-452"),
    SimpleEntry::new(0x0280, "OCRW (no version claimed)"),
    SimpleEntry::new(0x029e, "OCRW ISO/IEC 14776-381"),
    SimpleEntry::new(0x02a0, "MMC-3 (no version claimed)"),
    SimpleEntry::new(0x02b5, "MMC-3 T10/1363-D revision 9"),
    SimpleEntry::new(0x02b6, "MMC-3 T10/1363-D revision 10g"),
    SimpleEntry::new(0x02b8, "MMC-3 INCITS 360-2002"),
    SimpleEntry::new(0x02e0, "SMC-2 (no version claimed)"),
    SimpleEntry::new(0x02f5, "SMC-2 T10/1383-D revision 5"),
    SimpleEntry::new(0x02fc, "SMC-2 T10/1383-D revision 6"),
    SimpleEntry::new(0x02fd, "SMC-2 T10/1383-D revision 7"),
    SimpleEntry::new(0x02fe, "SMC-2 INCITS 382-2004"),
    SimpleEntry::new(0x0300, "SPC-3 (no version claimed)"),
    SimpleEntry::new(0x0301, "SPC-3 T10/1416-D revision 7"),
    SimpleEntry::new(0x0307, "SPC-3 T10/1416-D revision 21"),
    SimpleEntry::new(0x030f, "SPC-3 T10/1416-D revision 22"),
    SimpleEntry::new(0x0312, "SPC-3 T10/1416-D revision 23"),
    SimpleEntry::new(0x0314, "SPC-3 INCITS 408-2005"),
    SimpleEntry::new(0x0316, "SPC-3 ISO/IEC 14776-453"),
    SimpleEntry::new(0x0320, "SBC-2 (no version claimed)"),
    SimpleEntry::new(0x0322, "SBC-2 T10/1417-D revision 5a"),
    SimpleEntry::new(0x0324, "SBC-2 T10/1417-D revision 15"),
    SimpleEntry::new(0x033b, "SBC-2 T10/1417-D revision 16"),
    SimpleEntry::new(0x033d, "SBC-2 INCITS 405-2005"),
    SimpleEntry::new(0x033e, "SBC-2 ISO/IEC 14776-322"),
    SimpleEntry::new(0x0340, "OSD (no version claimed)"),
    SimpleEntry::new(0x0341, "OSD T10/1355-D revision 0"),
    SimpleEntry::new(0x0342, "OSD T10/1355-D revision 7a"),
    SimpleEntry::new(0x0343, "OSD T10/1355-D revision 8"),
    SimpleEntry::new(0x0344, "OSD T10/1355-D revision 9"),
    SimpleEntry::new(0x0355, "OSD T10/1355-D revision 10"),
    SimpleEntry::new(0x0356, "OSD INCITS 400-2004"),
    SimpleEntry::new(0x0360, "SSC-2 (no version claimed)"),
    SimpleEntry::new(0x0374, "SSC-2 T10/1434-D revision 7"),
    SimpleEntry::new(0x0375, "SSC-2 T10/1434-D revision 9"),
    SimpleEntry::new(0x037d, "SSC-2 INCITS 380-2003"),
    SimpleEntry::new(0x037e, "SSC-2 ISO/IEC 14776-342"),
    SimpleEntry::new(0x0380, "BCC (no version claimed)"),
    SimpleEntry::new(0x03a0, "MMC-4 (no version claimed)"),
    SimpleEntry::new(0x03b0, "MMC-4 T10/1545-D revision 5"),
    SimpleEntry::new(0x03b1, "MMC-4 T10/1545-D revision 5a"),
    SimpleEntry::new(0x03bd, "MMC-4 T10/1545-D revision 3"),
    SimpleEntry::new(0x03be, "MMC-4 T10/1545-D revision 3d"),
    SimpleEntry::new(0x03bf, "MMC-4 INCITS 401-2005"),
    SimpleEntry::new(0x03c0, "ADC (no version claimed)"),
    SimpleEntry::new(0x03d5, "ADC T10/1558-D revision 6"),
    SimpleEntry::new(0x03d6, "ADC T10/1558-D revision 7"),
    SimpleEntry::new(0x03d7, "ADC INCITS 403-2005"),
    SimpleEntry::new(0x03e0, "SES-2 (no version claimed)"),
    SimpleEntry::new(0x03e1, "SES-2 T10/1559-D revision 16"),
    SimpleEntry::new(0x03e7, "SES-2 T10/1559-D revision 19"),
    SimpleEntry::new(0x03eb, "SES-2 T10/1559-D revision 20"),
    SimpleEntry::new(0x03f0, "SES-2 INCITS 448-2008"),
    SimpleEntry::new(0x03f2, "SES-2 ISO/IEC 14776-372"),
    SimpleEntry::new(0x0400, "SSC-3 (no version claimed)"),
    SimpleEntry::new(0x0403, "SSC-3 T10/1611-D revision 04a"),
    SimpleEntry::new(0x0407, "SSC-3 T10/1611-D revision 05"),
    SimpleEntry::new(0x0409, "SSC-3 INCITS 467-2011"),
    SimpleEntry::new(0x040b, "SSC-3 ISO/IEC 14776-333"),
    SimpleEntry::new(0x0420, "MMC-5 (no version claimed)"),
    SimpleEntry::new(0x042f, "MMC-5 T10/1675-D revision 03"),
    SimpleEntry::new(0x0431, "MMC-5 T10/1675-D revision 03b"),
    SimpleEntry::new(0x0432, "MMC-5 T10/1675-D revision 04"),
    SimpleEntry::new(0x0434, "MMC-5 INCITS 430-2007"),
    SimpleEntry::new(0x0440, "OSD-2 (no version claimed)"),
    SimpleEntry::new(0x0444, "OSD-2 T10/1729-D revision 4"),
    SimpleEntry::new(0x0446, "OSD-2 T10/1729-D revision 5"),
    SimpleEntry::new(0x0448, "OSD-2 INCITS 458-2011"),
    SimpleEntry::new(0x0460, "SPC-4 (no version claimed)"),
    SimpleEntry::new(0x0461, "SPC-4 T10/BSR INCITS 513 revision 16"),
    SimpleEntry::new(0x0462, "SPC-4 T10/BSR INCITS 513 revision 18"),
    SimpleEntry::new(0x0463, "SPC-4 T10/BSR INCITS 513 revision 23"),
    SimpleEntry::new(0x0466, "SPC-4 T10/BSR INCITS 513 revision 36"),
    SimpleEntry::new(0x0468, "SPC-4 T10/BSR INCITS 513 revision 37"),
    SimpleEntry::new(0x0469, "SPC-4 T10/BSR INCITS 513 revision 37a"),
    SimpleEntry::new(0x046c, "SPC-4 INCITS 513-2015"),
    SimpleEntry::new(0x046e, "SPC-4 ISO/IEC 14776-454"),
    SimpleEntry::new(0x0480, "SMC-3 (no version claimed)"),
    SimpleEntry::new(0x0482, "SMC-3 T10/1730-D revision 15"),
    SimpleEntry::new(0x0484, "SMC-3 T10/1730-D revision 16"),
    SimpleEntry::new(0x0486, "SMC-3 INCITS 484-2012"),
    SimpleEntry::new(0x04a0, "ADC-2 (no version claimed)"),
    SimpleEntry::new(0x04a7, "ADC-2 T10/1741-D revision 7"),
    SimpleEntry::new(0x04aa, "ADC-2 T10/1741-D revision 8"),
    SimpleEntry::new(0x04ac, "ADC-2 INCITS 441-2008"),
    SimpleEntry::new(0x04c0, "SBC-3 (no version claimed)"),
    SimpleEntry::new(0x04c3, "SBC-3 T10/BSR INCITS 514 revision 35"),
    SimpleEntry::new(0x04c5, "SBC-3 T10/BSR INCITS 514 revision 36"),
    SimpleEntry::new(0x04c8, "SBC-3 INCITS 514-2014"),
    SimpleEntry::new(0x04ca, "SBC-3 ISO/IEC 14776-323"),
    SimpleEntry::new(0x04e0, "MMC-6 (no version claimed)"),
    SimpleEntry::new(0x04e3, "MMC-6 T10/1836-D revision 02b"),
    SimpleEntry::new(0x04e5, "MMC-6 T10/1836-D revision 02g"),
    SimpleEntry::new(0x04e6, "MMC-6 INCITS 468-2010"),
    SimpleEntry::new(0x04e7, "MMC-6 INCITS 468-2010 + MMC-6/AM1 INCITS 468-2010/AM 1"),
    SimpleEntry::new(0x0500, "ADC-3 (no version claimed)"),
    SimpleEntry::new(0x0502, "ADC-3 T10/1895-D revision 04"),
    SimpleEntry::new(0x0504, "ADC-3 T10/1895-D revision 05"),
    SimpleEntry::new(0x0506, "ADC-3 T10/1895-D revision 05a"),
    SimpleEntry::new(0x050a, "ADC-3 INCITS 497-2012"),
    SimpleEntry::new(0x0520, "SSC-4 (no version claimed)"),
    SimpleEntry::new(0x0523, "SSC-4 T10/BSR INCITS 516 revision 2"),
    SimpleEntry::new(0x0525, "SSC-4 T10/BSR INCITS 516 revision 3"),
    SimpleEntry::new(0x0527, "SSC-4 INCITS 516-2013"),
    SimpleEntry::new(0x0560, "OSD-3 (no version claimed)"),
    SimpleEntry::new(0x0580, "SES-3 (no version claimed)"),
    SimpleEntry::new(0x0582, "SES-3 T10/BSR INCITS 518 revision 13"),
    SimpleEntry::new(0x0584, "SES-3 T10/BSR INCITS 518 revision 14"),
    SimpleEntry::new(0x0591, "SES-3 INCITS 518-2017"),
    SimpleEntry::new(0x05a0, "SSC-5 (no version claimed)"),
    SimpleEntry::new(0x05a2, "SSC-5 BSR INCITS 503-2022"),
    SimpleEntry::new(0x05ab, "SSC-5 BSR INCITS 503 revision 06"),
    SimpleEntry::new(0x05af, "SSC-5 AM1 (no version claimed)"),
    SimpleEntry::new(0x05c0, "SPC-5 (no version claimed)"),
    SimpleEntry::new(0x05c2, "SPC-5 INCITS 502-2019"),
    SimpleEntry::new(0x05cb, "SPC-5 BSR INCITS 502 revision 22"),
    SimpleEntry::new(0x05e0, "SFSC (no version claimed)"),
    SimpleEntry::new(0x05e3, "SFSC BSR INCITS 501 revision 01"),
    SimpleEntry::new(0x05e5, "SFSC BSR INCITS 501 revision 02"),
    SimpleEntry::new(0x05e8, "SFSC INCITS 501-2016"),
    SimpleEntry::new(0x05ea, "SFSC ISO/IEC 14776-481"),
    SimpleEntry::new(0x0600, "SBC-4 (no version claimed)"),
    SimpleEntry::new(0x0602, "SBC-4 INCITS 506-2021"),
    SimpleEntry::new(0x060f, "SBC-4 BSR INCITS 506 revision 20a"),
    SimpleEntry::new(0x0610, "SBC-4 BSR INCITS 506 revision 22"),
    SimpleEntry::new(0x0620, "ZBC (no version claimed)"),
    SimpleEntry::new(0x0622, "ZBC BSR INCITS 536 revision 02"),
    SimpleEntry::new(0x0624, "ZBC BSR INCITS 536 revision 05"),
    SimpleEntry::new(0x0628, "ZBC INCITS 536-2016"),
    SimpleEntry::new(0x0629, "ZBC AM1 INCITS 536-2016/AM1-2019"),
    SimpleEntry::new(0x0640, "ADC-4 (no version claimed)"),
    SimpleEntry::new(0x064b, "ADC-4 BSR INCITS 541 revision 04"),
    SimpleEntry::new(0x064c, "ADC-4 BSR INCITS 541 revision 05"),
    SimpleEntry::new(0x0660, "ZBC-2 (no version claimed)"),
    SimpleEntry::new(0x0662, "ZBC-2 INCITS 550-2023"),
    SimpleEntry::new(0x066b, "ZBC-2 BSR INCITS 550 revision 13"),
    SimpleEntry::new(0x0680, "SES-4 (no version claimed)"),
    SimpleEntry::new(0x0682, "SES-4 INCITS 555-2020"),
    SimpleEntry::new(0x068f, "SES-4 BSR INCITS 555 revision 03"),
    SimpleEntry::new(0x0690, "SES-4 BSR INCITS 555 revision 05"),
    SimpleEntry::new(0x06a0, "ZBC-3 (no version claimed)"),
    SimpleEntry::new(0x06c0, "SBC-5 (no version claimed)"),
    SimpleEntry::new(0x06e0, "SPC-6 (no version claimed)"),
    SimpleEntry::new(0x0820, "SSA-TL2 (no version claimed)"),
    SimpleEntry::new(0x083b, "SSA-TL2 T10.1/1147-D revision 05b"),
    SimpleEntry::new(0x083c, "SSA-TL2 INCITS 308-1998"),
    SimpleEntry::new(0x0840, "SSA-TL1 (no version claimed)"),
    SimpleEntry::new(0x085b, "SSA-TL1 T10.1/0989-D revision 10b"),
    SimpleEntry::new(0x085c, "SSA-TL1 INCITS 295-1996"),
    SimpleEntry::new(0x0860, "SSA-S3P (no version claimed)"),
    SimpleEntry::new(0x087b, "SSA-S3P T10.1/1051-D revision 05b"),
    SimpleEntry::new(0x087c, "SSA-S3P INCITS 309-1998"),
    SimpleEntry::new(0x0880, "SSA-S2P (no version claimed)"),
    SimpleEntry::new(0x089b, "SSA-S2P T10.1/1121-D revision 07b"),
    SimpleEntry::new(0x089c, "SSA-S2P INCITS 294-1996"),
    SimpleEntry::new(0x08a0, "SIP (no version claimed)"),
    SimpleEntry::new(0x08bb, "SIP T10/0856-D revision 10"),
    SimpleEntry::new(0x08bc, "SIP INCITS 292-1997"),
    SimpleEntry::new(0x08c0, "FCP (no version claimed)"),
    SimpleEntry::new(0x08db, "FCP T10/0993-D revision 12"),
    SimpleEntry::new(0x08dc, "FCP INCITS 269-1996"),
    SimpleEntry::new(0x08e0, "SBP-2 (no version claimed)"),
    SimpleEntry::new(0x08fb, "SBP-2 T10/1155-D revision 04"),
    SimpleEntry::new(0x08fc, "SBP-2 INCITS 325-1998"),
    SimpleEntry::new(0x0900, "FCP-2 (no version claimed)"),
    SimpleEntry::new(0x0901, "FCP-2 T10/1144-D revision 4"),
    SimpleEntry::new(0x0915, "FCP-2 T10/1144-D revision 7"),
    SimpleEntry::new(0x0916, "FCP-2 T10/1144-D revision 7a"),
    SimpleEntry::new(0x0917, "FCP-2 INCITS 350-2003"),
    SimpleEntry::new(0x0918, "FCP-2 T10/1144-D revision 8"),
    SimpleEntry::new(0x091a, "FCP-2 ISO/IEC 14776-222"),
    SimpleEntry::new(0x0920, "SST (no version claimed)"),
    SimpleEntry::new(0x0935, "SST T10/1380-D revision 8b"),
    SimpleEntry::new(0x0940, "SRP (no version claimed)"),
    SimpleEntry::new(0x0954, "SRP T10/1415-D revision 10"),
    SimpleEntry::new(0x0955, "SRP T10/1415-D revision 16a"),
    SimpleEntry::new(0x095c, "SRP INCITS 365-2002"),
    SimpleEntry::new(0x0960, "iSCSI (no version claimed)"),
    SimpleEntry::new(0x0961, "iSCSI RFC 7143 iSCSIProtocolLevel=1"),
    SimpleEntry::new(0x0962, "iSCSI RFC 7144 iSCSIProtocolLevel=2"),
    SimpleEntry::new(0x0963, "iSCSI RFC 7144 iSCSIProtocolLevel=3"),
    SimpleEntry::new(0x0964, "iSCSI RFC 7144 iSCSIProtocolLevel=4"),
    SimpleEntry::new(0x0965, "iSCSI RFC 7144 iSCSIProtocolLevel=5"),
    SimpleEntry::new(0x0966, "iSCSI RFC 7144 iSCSIProtocolLevel=6"),
    SimpleEntry::new(0x0967, "iSCSI RFC 7144 iSCSIProtocolLevel=7"),
    SimpleEntry::new(0x0968, "iSCSI RFC 7144 iSCSIProtocolLevel=8"),
    SimpleEntry::new(0x0969, "iSCSI RFC 7144 iSCSIProtocolLevel=9"),
    SimpleEntry::new(0x096a, "iSCSI RFC 7144 iSCSIProtocolLevel=10"),
    SimpleEntry::new(0x096b, "iSCSI RFC 7144 iSCSIProtocolLevel=11"),
    SimpleEntry::new(0x096c, "iSCSI RFC 7144 iSCSIProtocolLevel=12"),
    SimpleEntry::new(0x096d, "iSCSI RFC 7144 iSCSIProtocolLevel=13"),
    SimpleEntry::new(0x096e, "iSCSI RFC 7144 iSCSIProtocolLevel=14"),
    SimpleEntry::new(0x096f, "iSCSI RFC 7144 iSCSIProtocolLevel=15"),
    SimpleEntry::new(0x0970, "iSCSI RFC 7144 iSCSIProtocolLevel=16"),
    SimpleEntry::new(0x0971, "iSCSI RFC 7144 iSCSIProtocolLevel=17"),
    SimpleEntry::new(0x0972, "iSCSI RFC 7144 iSCSIProtocolLevel=18"),
    SimpleEntry::new(0x0973, "iSCSI RFC 7144 iSCSIProtocolLevel=19"),
    SimpleEntry::new(0x0974, "iSCSI RFC 7144 iSCSIProtocolLevel=20"),
    SimpleEntry::new(0x0975, "iSCSI RFC 7144 iSCSIProtocolLevel=21"),
    SimpleEntry::new(0x0976, "iSCSI RFC 7144 iSCSIProtocolLevel=22"),
    SimpleEntry::new(0x0977, "iSCSI RFC 7144 iSCSIProtocolLevel=23"),
    SimpleEntry::new(0x0978, "iSCSI RFC 7144 iSCSIProtocolLevel=24"),
    SimpleEntry::new(0x0979, "iSCSI RFC 7144 iSCSIProtocolLevel=25"),
    SimpleEntry::new(0x097a, "iSCSI RFC 7144 iSCSIProtocolLevel=26"),
    SimpleEntry::new(0x097b, "iSCSI RFC 7144 iSCSIProtocolLevel=27"),
    SimpleEntry::new(0x097c, "iSCSI RFC 7144 iSCSIProtocolLevel=28"),
    SimpleEntry::new(0x097d, "iSCSI RFC 7144 iSCSIProtocolLevel=29"),
    SimpleEntry::new(0x097e, "iSCSI RFC 7144 iSCSIProtocolLevel=30"),
    SimpleEntry::new(0x097f, "iSCSI RFC 7144 iSCSIProtocolLevel=31"),
    SimpleEntry::new(0x0980, "SBP-3 (no version claimed)"),
    SimpleEntry::new(0x0982, "SBP-3 T10/1467-D revision 1f"),
    SimpleEntry::new(0x0994, "SBP-3 T10/1467-D revision 3"),
    SimpleEntry::new(0x099a, "SBP-3 T10/1467-D revision 4"),
    SimpleEntry::new(0x099b, "SBP-3 T10/1467-D revision 5"),
    SimpleEntry::new(0x099c, "SBP-3 INCITS 375-2004"),
    SimpleEntry::new(0x09a0, "SRP-2 (no version claimed)"),
    SimpleEntry::new(0x09bc, "SRP-2 INCITS 551-2019"),
    SimpleEntry::new(0x09c0, "ADP (no version claimed)"),
    SimpleEntry::new(0x09e0, "ADT (no version claimed)"),
    SimpleEntry::new(0x09f9, "ADT T10/1557-D revision 11"),
    SimpleEntry::new(0x09fa, "ADT T10/1557-D revision 14"),
    SimpleEntry::new(0x09fd, "ADT INCITS 406-2005"),
    SimpleEntry::new(0x0a00, "FCP-3 (no version claimed)"),
    SimpleEntry::new(0x0a07, "FCP-3 T10/1560-D revision 3f"),
    SimpleEntry::new(0x0a0f, "FCP-3 T10/1560-D revision 4"),
    SimpleEntry::new(0x0a11, "FCP-3 INCITS 416-2006"),
    SimpleEntry::new(0x0a1c, "FCP-3 ISO/IEC 14776-223"),
    SimpleEntry::new(0x0a20, "ADT-2 (no version claimed)"),
    SimpleEntry::new(0x0a22, "ADT-2 T10/1742-D revision 06"),
    SimpleEntry::new(0x0a27, "ADT-2 T10/1742-D revision 08"),
    SimpleEntry::new(0x0a28, "ADT-2 T10/1742-D revision 09"),
    SimpleEntry::new(0x0a2b, "ADT-2 INCITS 472-2011"),
    SimpleEntry::new(0x0a40, "FCP-4 (no version claimed)"),
    SimpleEntry::new(0x0a42, "FCP-4 T10/1828-D revision 01"),
    SimpleEntry::new(0x0a44, "FCP-4 T10/1828-D revision 02"),
    SimpleEntry::new(0x0a45, "FCP-4 T10/1828-D revision 02b"),
    SimpleEntry::new(0x0a46, "FCP-4 INCITS 481-2011"),
    SimpleEntry::new(0x0a50, "FCP-4 ISO/IEC 14776-224"),
    SimpleEntry::new(0x0a52, "FCP-4 AM1 INCITS 481-2011/AM1-2018"),
    SimpleEntry::new(0x0a60, "ADT-3 (no version claimed)"),
    SimpleEntry::new(0x0a62, "ADT-3 INCITS 542-2022"),
    SimpleEntry::new(0x0a6b, "ADT-3 BSR INCITS 542 revision 03"),
    SimpleEntry::new(0x0a80, "FCP-5 (no version claimed)"),
    SimpleEntry::new(0x0a82, "FCP-5 INCITS 563-2023"),
    SimpleEntry::new(0x0a8b, "FCP-5 BSR INCITS 563 revision 04"),
    SimpleEntry::new(0x0aa0, "SPI (no version claimed)"),
    SimpleEntry::new(0x0ab9, "SPI T10/0855-D revision 15a"),
    SimpleEntry::new(0x0aba, "SPI INCITS 253-1995"),
    SimpleEntry::new(0x0abb, "SPI T10/0855-D revision 15a with SPI Amnd revision 3a"),
    SimpleEntry::new(0x0abc, "SPI INCITS 253-1995 with SPI Amnd INCITS 253/AM1-1998"),
    SimpleEntry::new(0x0ac0, "Fast-20 (no version claimed)"),
    SimpleEntry::new(0x0adb, "Fast-20 T10/1071 revision 06"),
    SimpleEntry::new(0x0adc, "Fast-20 INCITS 277-1996"),
    SimpleEntry::new(0x0ae0, "SPI-2 (no version claimed)"),
    SimpleEntry::new(0x0afb, "SPI-2 T10/1142-D revision 20b"),
    SimpleEntry::new(0x0afc, "SPI-2 INCITS 302-1999"),
    SimpleEntry::new(0x0b00, "SPI-3 (no version claimed)"),
    SimpleEntry::new(0x0b18, "SPI-3 T10/1302-D revision 10"),
    SimpleEntry::new(0x0b19, "SPI-3 T10/1302-D revision 13a"),
    SimpleEntry::new(0x0b1a, "SPI-3 T10/1302-D revision 14"),
    SimpleEntry::new(0x0b1c, "SPI-3 INCITS 336-2000"),
    SimpleEntry::new(0x0b20, "EPI (no version claimed)"),
    SimpleEntry::new(0x0b3b, "EPI T10/1134 revision 16"),
    SimpleEntry::new(0x0b3c, "EPI INCITS TR-23 1999"),
    SimpleEntry::new(0x0b40, "SPI-4 (no version claimed)"),
    SimpleEntry::new(0x0b54, "SPI-4 T10/1365-D revision 7"),
    SimpleEntry::new(0x0b55, "SPI-4 T10/1365-D revision 9"),
    SimpleEntry::new(0x0b56, "SPI-4 INCITS 362-2002"),
    SimpleEntry::new(0x0b59, "SPI-4 T10/1365-D revision 10"),
    SimpleEntry::new(0x0b60, "SPI-5 (no version claimed)"),
    SimpleEntry::new(0x0b79, "SPI-5 T10/1525-D revision 3"),
    SimpleEntry::new(0x0b7a, "SPI-5 T10/1525-D revision 5"),
    SimpleEntry::new(0x0b7b, "SPI-5 T10/1525-D revision 6"),
    SimpleEntry::new(0x0b7c, "SPI-5 INCITS 367-2003"),
    SimpleEntry::new(0x0be0, "SAS (no version claimed)"),
    SimpleEntry::new(0x0be1, "SAS T10/1562-D revision 01"),
    SimpleEntry::new(0x0bf5, "SAS T10/1562-D revision 03"),
    SimpleEntry::new(0x0bfa, "SAS T10/1562-D revision 4"),
    SimpleEntry::new(0x0bfb, "SAS T10/1562-D revision 04"),
    SimpleEntry::new(0x0bfc, "SAS T10/1562-D revision 05"),
    SimpleEntry::new(0x0bfd, "SAS INCITS 376-2003"),
    SimpleEntry::new(0x0bfe, "SAS ISO/IEC 14776-150"),
    SimpleEntry::new(0x0c00, "SAS-1.1 (no version claimed)"),
    SimpleEntry::new(0x0c07, "SAS-1.1 T10/1601-D revision 9"),
    SimpleEntry::new(0x0c0f, "SAS-1.1 T10/1601-D revision 10"),
    SimpleEntry::new(0x0c11, "SAS-1.1 INCITS 417-2006"),
    SimpleEntry::new(0x0c12, "SAS-1.1 ISO/IEC 14776-151"),
    SimpleEntry::new(0x0c20, "SAS-2 (no version claimed)"),
    SimpleEntry::new(0x0c23, "SAS-2 T10/1760-D revision 14"),
    SimpleEntry::new(0x0c27, "SAS-2 T10/1760-D revision 15"),
    SimpleEntry::new(0x0c28, "SAS-2 T10/1760-D revision 16"),
    SimpleEntry::new(0x0c2a, "SAS-2 INCITS 457-2010"),
    SimpleEntry::new(0x0c40, "SAS-2.1 (no version claimed)"),
    SimpleEntry::new(0x0c48, "SAS-2.1 T10/2125-D revision 04"),
    SimpleEntry::new(0x0c4a, "SAS-2.1 T10/2125-D revision 06"),
    SimpleEntry::new(0x0c4b, "SAS-2.1 T10/2125-D revision 07"),
    SimpleEntry::new(0x0c4e, "SAS-2.1 INCITS 478-2011"),
    SimpleEntry::new(0x0c4f, "SAS-2.1 INCITS 478-2011 w/ Amnd 1 INCITS 478/AM1-2014"),
    SimpleEntry::new(0x0c52, "SAS-2.1 ISO/IEC 14776-153"),
    SimpleEntry::new(0x0c60, "SAS-3 (no version claimed)"),
    SimpleEntry::new(0x0c63, "SAS-3 T10/BSR INCITS 519 revision 05a"),
    SimpleEntry::new(0x0c65, "SAS-3 T10/BSR INCITS 519 revision 06"),
    SimpleEntry::new(0x0c68, "SAS-3 INCITS 519-2014"),
    SimpleEntry::new(0x0c6a, "SAS-3 ISO/IEC 14776-154"),
    SimpleEntry::new(0x0c80, "SAS-4 (no version claimed)"),
    SimpleEntry::new(0x0c82, "SAS-4 T10/BSR INCITS 534 revision 08a"),
    SimpleEntry::new(0x0c84, "SAS-4 T10/BSR INCITS 534 revision 09"),
    SimpleEntry::new(0x0c92, "SAS-4 INCITS 534-2019"),
    SimpleEntry::new(0x0ca0, "SAS-4.1 (no version claimed)"),
    SimpleEntry::new(0x0ca2, "SAS-4.1 INCITS 567-2023"),
    SimpleEntry::new(0x0caf, "SAS-4.1 BSR INCITS 567 revision 03"),
    SimpleEntry::new(0x0cb0, "SAS-4.1 BSR INCITS 567 revision 04"),
    SimpleEntry::new(0x0d20, "FC-PH (no version claimed)"),
    SimpleEntry::new(0x0d3b, "FC-PH INCITS 230-1994"),
    SimpleEntry::new(0x0d3c, "FC-PH INCITS 230-1994 with Amnd 1 INCITS 230/AM1-1996"),
    SimpleEntry::new(0x0d40, "FC-AL (no version claimed)"),
    SimpleEntry::new(0x0d5c, "FC-AL INCITS 272-1996"),
    SimpleEntry::new(0x0d60, "FC-AL-2 (no version claimed)"),
    SimpleEntry::new(0x0d61, "FC-AL-2 T11/1133-D revision 7.0"),
    SimpleEntry::new(0x0d63, "FC-AL-2 INCITS 332-1999 with AM1-2003 & AM2-2006"),
    SimpleEntry::new(0x0d64, "FC-AL-2 INCITS 332-1999 with Amnd 2 AM2-2006"),
    SimpleEntry::new(0x0d65, "FC-AL-2 ISO/IEC 14165-122 with AM1 & AM2"),
    SimpleEntry::new(0x0d7c, "FC-AL-2 INCITS 332-1999"),
    SimpleEntry::new(0x0d7d, "FC-AL-2 INCITS 332-1999 with Amnd 1 AM1-2003"),
    SimpleEntry::new(0x0d80, "FC-PH-3 (no version claimed)"),
    SimpleEntry::new(0x0d9c, "FC-PH-3 INCITS 303-1998"),
    SimpleEntry::new(0x0da0, "FC-FS (no version claimed)"),
    SimpleEntry::new(0x0db7, "FC-FS T11/1331-D revision 1.2"),
    SimpleEntry::new(0x0db8, "FC-FS T11/1331-D revision 1.7"),
    SimpleEntry::new(0x0dbc, "FC-FS INCITS 373-2003"),
    SimpleEntry::new(0x0dbd, "FC-FS ISO/IEC 14165-251"),
    SimpleEntry::new(0x0dc0, "FC-PI (no version claimed)"),
    SimpleEntry::new(0x0ddc, "FC-PI INCITS 352-2002"),
    SimpleEntry::new(0x0de0, "FC-PI-2 (no version claimed)"),
    SimpleEntry::new(0x0de2, "FC-PI-2 T11/1506-D revision 5.0"),
    SimpleEntry::new(0x0de4, "FC-PI-2 INCITS 404-2006"),
    SimpleEntry::new(0x0e00, "FC-FS-2 (no version claimed)"),
    SimpleEntry::new(0x0e02, "FC-FS-2 INCITS 242-2007"),
    SimpleEntry::new(0x0e03, "FC-FS-2 INCITS 242-2007 with AM1 INCITS 242/AM1-2007"),
    SimpleEntry::new(0x0e20, "FC-LS (no version claimed)"),
    SimpleEntry::new(0x0e21, "FC-LS T11/1620-D revision 1.62"),
    SimpleEntry::new(0x0e29, "FC-LS INCITS 433-2007"),
    SimpleEntry::new(0x0e40, "FC-SP (no version claimed)"),
    SimpleEntry::new(0x0e42, "FC-SP T11/1570-D revision 1.6"),
    SimpleEntry::new(0x0e45, "FC-SP INCITS 426-2007"),
    SimpleEntry::new(0x0e60, "FC-PI-3 (no version claimed)"),
    SimpleEntry::new(0x0e62, "FC-PI-3 T11/1625-D revision 2.0"),
    SimpleEntry::new(0x0e68, "FC-PI-3 T11/1625-D revision 2.1"),
    SimpleEntry::new(0x0e6a, "FC-PI-3 T11/1625-D revision 4.0"),
    SimpleEntry::new(0x0e6e, "FC-PI-3 INCITS 460-2011"),
    SimpleEntry::new(0x0e80, "FC-PI-4 (no version claimed)"),
    SimpleEntry::new(0x0e82, "FC-PI-4 T11/1647-D revision 8.0"),
    SimpleEntry::new(0x0e88, "FC-PI-4 INCITS 450-2009"),
    SimpleEntry::new(0x0ea0, "FC 10GFC (no version claimed)"),
    SimpleEntry::new(0x0ea2, "FC 10GFC INCITS 364-2003"),
    SimpleEntry::new(0x0ea3, "FC 10GFC ISO/IEC 14165-116"),
    SimpleEntry::new(0x0ea5, "FC 10GFC ISO/IEC 14165-116 with AM1"),
    SimpleEntry::new(0x0ea6, "FC 10GFC INCITS 364-2003 with AM1 INCITS 364/AM1-2007"),
    SimpleEntry::new(0x0ec0, "FC-SP-2 (no version claimed)"),
    SimpleEntry::new(0x0ee0, "FC-FS-3 (no version claimed)"),
    SimpleEntry::new(0x0ee2, "FC-FS-3 T11/1861-D revision 0.9"),
    SimpleEntry::new(0x0ee7, "FC-FS-3 T11/1861-D revision 1.0"),
    SimpleEntry::new(0x0ee9, "FC-FS-3 T11/1861-D revision 1.10"),
    SimpleEntry::new(0x0eeb, "FC-FS-3 INCITS 470-2011"),
    SimpleEntry::new(0x0f00, "FC-LS-2 (no version claimed)"),
    SimpleEntry::new(0x0f03, "FC-LS-2 T11/2103-D revision 2.11"),
    SimpleEntry::new(0x0f05, "FC-LS-2 T11/2103-D revision 2.21"),
    SimpleEntry::new(0x0f07, "FC-LS-2 INCITS 477-2011"),
    SimpleEntry::new(0x0f20, "FC-PI-5 (no version claimed)"),
    SimpleEntry::new(0x0f27, "FC-PI-5 T11/2118-D revision 2.00"),
    SimpleEntry::new(0x0f28, "FC-PI-5 T11/2118-D revision 3.00"),
    SimpleEntry::new(0x0f2a, "FC-PI-5 T11/2118-D revision 6.00"),
    SimpleEntry::new(0x0f2b, "FC-PI-5 T11/2118-D revision 6.10"),
    SimpleEntry::new(0x0f2e, "FC-PI-5 INCITS 479-2011"),
    SimpleEntry::new(0x0f40, "FC-PI-6 (no version claimed)"),
    SimpleEntry::new(0x0f60, "FC-FS-4 (no version claimed)"),
    SimpleEntry::new(0x0f80, "FC-LS-3 (no version claimed)"),
    SimpleEntry::new(0x12a0, "FC-SCM (no version claimed)"),
    SimpleEntry::new(0x12a3, "FC-SCM T11/1824DT revision 1.0"),
    SimpleEntry::new(0x12a5, "FC-SCM T11/1824DT revision 1.1"),
    SimpleEntry::new(0x12a7, "FC-SCM T11/1824DT revision 1.4"),
    SimpleEntry::new(0x12aa, "FC-SCM INCITS TR-47 2012"),
    SimpleEntry::new(0x12c0, "FC-DA-2 (no version claimed)"),
    SimpleEntry::new(0x12c3, "FC-DA-2 T11/1870DT revision 1.04"),
    SimpleEntry::new(0x12c5, "FC-DA-2 T11/1870DT revision 1.06"),
    SimpleEntry::new(0x12c9, "FC-DA-2 INCITS TR-49 2012"),
    SimpleEntry::new(0x12e0, "FC-DA (no version claimed)"),
    SimpleEntry::new(0x12e2, "FC-DA T11/1513-DT revision 3.1"),
    SimpleEntry::new(0x12e8, "FC-DA INCITS TR-36 2004"),
    SimpleEntry::new(0x12e9, "FC-DA ISO/IEC 14165-341"),
    SimpleEntry::new(0x1300, "FC-Tape (no version claimed)"),
    SimpleEntry::new(0x1301, "FC-Tape T11/1315 revision 1.16"),
    SimpleEntry::new(0x131b, "FC-Tape T11/1315 revision 1.17"),
    SimpleEntry::new(0x131c, "FC-Tape INCITS TR-24 1999"),
    SimpleEntry::new(0x1320, "FC-FLA (no version claimed)"),
    SimpleEntry::new(0x133b, "FC-FLA T11/1235 revision 7"),
    SimpleEntry::new(0x133c, "FC-FLA INCITS TR-20 1998"),
    SimpleEntry::new(0x1340, "FC-PLDA (no version claimed)"),
    SimpleEntry::new(0x135b, "FC-PLDA T11/1162 revision 2.1"),
    SimpleEntry::new(0x135c, "FC-PLDA INCITS TR-19 1998"),
    SimpleEntry::new(0x1360, "SSA-PH2 (no version claimed)"),
    SimpleEntry::new(0x137b, "SSA-PH2 T10.1/1145-D revision 09c"),
    SimpleEntry::new(0x137c, "SSA-PH2 INCITS 293-1996"),
    SimpleEntry::new(0x1380, "SSA-PH3 (no version claimed)"),
    SimpleEntry::new(0x139b, "SSA-PH3 T10.1/1146-D revision 05b"),
    SimpleEntry::new(0x139c, "SSA-PH3 INCITS 307-1998"),
    SimpleEntry::new(0x14a0, "IEEE 1394 (no version claimed)"),
    SimpleEntry::new(0x14bd, "IEEE 1394-1995"),
    SimpleEntry::new(0x14c0, "IEEE 1394a (no version claimed)"),
    SimpleEntry::new(0x14e0, "IEEE 1394b (no version claimed)"),
    SimpleEntry::new(0x15e0, "ATA/ATAPI-6 (no version claimed)"),
    SimpleEntry::new(0x15fd, "ATA/ATAPI-6 INCITS 361-2002"),
    SimpleEntry::new(0x1600, "ATA/ATAPI-7 (no version claimed)"),
    SimpleEntry::new(0x1602, "ATA/ATAPI-7 T13/1532-D revision 3"),
    SimpleEntry::new(0x161c, "ATA/ATAPI-7 INCITS 397-2005"),
    SimpleEntry::new(0x161e, "ATA/ATAPI-7 ISO/IEC 24739"),
    SimpleEntry::new(0x1620, "ATA/ATAPI-8 ATA8-AAM (no version claimed)"),
    SimpleEntry::new(0x1621, "ATA/ATAPI-8 ATA8-APT Parallel transport (no version claimed)"),
    SimpleEntry::new(0x1622, "ATA/ATAPI-8 ATA8-AST Serial transport (no version claimed)"),
    SimpleEntry::new(0x1623, "ATA/ATAPI-8 ATA8-ACS ATA/ATAPI command set (no version claimed)"),
    SimpleEntry::new(0x1628, "ATA/ATAPI-8 ATA8-AAM INCITS 451-2008"),
    SimpleEntry::new(0x162a, "ATA/ATAPI-8 ATA8-ACS INCITS 452-2009 w/ Amendment 1"),
    SimpleEntry::new(0x1630, "ATA/ATAPI-8 ATA8-ACS ATA/ATAPI Command Set ISO/IEC 17760-101"),
    SimpleEntry::new(0x1728, "Universal Serial Bus Specification, Revision 1.1"),
    SimpleEntry::new(0x1729, "Universal Serial Bus Specification, Revision 2.0"),
    SimpleEntry::new(0x172a, "Universal Serial Bus 3.2 Specification Revision 1.0"),
    SimpleEntry::new(0x172b, "Universal Serial Bus 4 Specification Version 1.0"),
    SimpleEntry::new(0x172c, "Universal Serial Bus 4 Specification Version 2.0"),
    SimpleEntry::new(0x1730, "USB Mass Storage Class Bulk-Only Transport, Revision 1.0"),
    SimpleEntry::new(0x1740, "UAS (no version claimed)"),
    SimpleEntry::new(0x1743, "UAS T10/2095-D revision 02"),
    SimpleEntry::new(0x1747, "UAS T10/2095-D revision 04"),
    SimpleEntry::new(0x1748, "UAS INCITS 471-2010"),
    SimpleEntry::new(0x1749, "UAS ISO/IEC 14776-251"),
    SimpleEntry::new(0x1761, "ACS-2 (no version claimed)"),
    SimpleEntry::new(0x1762, "ACS-2 INCITS 482-2013"),
    SimpleEntry::new(0x1765, "ACS-3 (no version claimed)"),
    SimpleEntry::new(0x1766, "ACS-3 INCITS 522-2014"),
    SimpleEntry::new(0x1767, "ACS-4 INCITS 529-2018"),
    SimpleEntry::new(0x1768, "ACS-4 (no version claimed)"),
    SimpleEntry::new(0x1769, "ACS-5 (no version claimed)"),
    SimpleEntry::new(0x176a, "ACS-5 INCITS 558-2021"),
    SimpleEntry::new(0x176e, "ACS-6 (no version claimed)"),
    SimpleEntry::new(0x1778, "ACS-2 ISO/IEC 17760-102"),
    SimpleEntry::new(0x1779, "ACS-3 ISO/IEC 17760-103"),
    SimpleEntry::new(0x177b, "ACS-5 ISO/IEC 17760-105"),
    SimpleEntry::new(0x1780, "UAS-2 (no version claimed)"),
    SimpleEntry::new(0x17a3, "ZAC (no version claimed)"),
    SimpleEntry::new(0x17a4, "ZAC INCITS 537-2016"),
    SimpleEntry::new(0x17a5, "ZAC-2 INCITS 549-2022"),
    SimpleEntry::new(0x17a6, "ZAC-2 (no version claimed)"),
    SimpleEntry::new(0x17a7, "ZAC-3 (no version claimed)"),
    SimpleEntry::new(0x17bc, "ZAC AM1 INCITS 537-2016/AM1-2019"),
    SimpleEntry::new(0x17c0, "UAS-3 (no version claimed)"),
    SimpleEntry::new(0x17c2, "UAS-3 INCITS 572-2021"),
    SimpleEntry::new(0x17c5, "UAS-3 BSR INCITS 572 revision 05"),
    SimpleEntry::new(0x1807, "UAS-3 ISO/IEC 14776-253"),
    SimpleEntry::new(0x1ea0, "SAT (no version claimed)"),
    SimpleEntry::new(0x1ea7, "SAT T10/1711-D revision 8"),
    SimpleEntry::new(0x1eab, "SAT T10/1711-D revision 9"),
    SimpleEntry::new(0x1ead, "SAT INCITS 431-2007"),
    SimpleEntry::new(0x1ec0, "SAT-2 (no version claimed)"),
    SimpleEntry::new(0x1ec4, "SAT-2 T10/1826-D revision 06"),
    SimpleEntry::new(0x1ec8, "SAT-2 T10/1826-D revision 09"),
    SimpleEntry::new(0x1eca, "SAT-2 INCITS 465-2010"),
    SimpleEntry::new(0x1ee0, "SAT-3 (no version claimed)"),
    SimpleEntry::new(0x1ee2, "SAT-3 T10/BSR INCITS 517 revision 4"),
    SimpleEntry::new(0x1ee4, "SAT-3 T10/BSR INCITS 517 revision 7"),
    SimpleEntry::new(0x1ee8, "SAT-3 INCITS 517-2015"),
    SimpleEntry::new(0x1f00, "SAT-4 (no version claimed)"),
    SimpleEntry::new(0x1f02, "SAT-4 T10/BSR INCITS 491 revision 5"),
    SimpleEntry::new(0x1f04, "SAT-4 T10/BSR INCITS 491 revision 6"),
    SimpleEntry::new(0x1f0c, "SAT-4 INCITS 491-2018"),
    SimpleEntry::new(0x1f20, "SAT-5 (no version claimed)"),
    SimpleEntry::new(0x1f25, "SAT-5 BSR INCITS 577 revision 10"),
    SimpleEntry::new(0x1f40, "SAT-6 (no version claimed)"),
    SimpleEntry::new(0x1f60, "SNT (no version claimed)"),
    SimpleEntry::new(0x20a0, "SPL (no version claimed)"),
    SimpleEntry::new(0x20a3, "SPL T10/2124-D revision 6a"),
    SimpleEntry::new(0x20a5, "SPL T10/2124-D revision 7"),
    SimpleEntry::new(0x20a7, "SPL INCITS 476-2011"),
    SimpleEntry::new(0x20a8, "SPL INCITS 476-2011 + SPL AM1 INCITS 476/AM1 2012"),
    SimpleEntry::new(0x20aa, "SPL ISO/IEC 14776-261"),
    SimpleEntry::new(0x20c0, "SPL-2 (no version claimed)"),
    SimpleEntry::new(0x20c2, "SPL-2 T10/BSR INCITS 505 revision 4"),
    SimpleEntry::new(0x20c4, "SPL-2 T10/BSR INCITS 505 revision 5"),
    SimpleEntry::new(0x20c8, "SPL-2 INCITS 505-2013"),
    SimpleEntry::new(0x20c9, "SPL-2 ISO/IEC 14776-262"),
    SimpleEntry::new(0x20e0, "SPL-3 (no version claimed)"),
    SimpleEntry::new(0x20e4, "SPL-3 T10/BSR INCITS 492 revision 6"),
    SimpleEntry::new(0x20e6, "SPL-3 T10/BSR INCITS 492 revision 7"),
    SimpleEntry::new(0x20e8, "SPL-3 INCITS 492-2015"),
    SimpleEntry::new(0x20e9, "SPL-3 ISO/IEC 14776-263"),
    SimpleEntry::new(0x2100, "SPL-4 (no version claimed)"),
    SimpleEntry::new(0x2102, "SPL-4 T10/BSR INCITS 538 revision 08a"),
    SimpleEntry::new(0x2104, "SPL-4 T10/BSR INCITS 538 revision 10"),
    SimpleEntry::new(0x2105, "SPL-4 T10/BSR INCITS 538 revision 11"),
    SimpleEntry::new(0x2107, "SPL-4 T10/BSR INCITS 538 revision 13"),
    SimpleEntry::new(0x2110, "SPL-4 INCITS 538-2018"),
    SimpleEntry::new(0x2120, "SPL-5 (no version claimed)"),
    SimpleEntry::new(0x2122, "SPL-5 INCITS 554-2023"),
    SimpleEntry::new(0x212e, "SPL-5 BSR INCITS 554 revision 14"),
    SimpleEntry::new(0x212f, "SPL-5 BSR INCITS 554 revision 15"),
    SimpleEntry::new(0x21e0, "SOP (no version claimed)"),
    SimpleEntry::new(0x21e4, "SOP T10/BSR INCITS 489 revision 4"),
    SimpleEntry::new(0x21e6, "SOP T10/BSR INCITS 489 revision 5"),
    SimpleEntry::new(0x21e8, "SOP INCITS 489-2014"),
    SimpleEntry::new(0x2200, "PQI (no version claimed)"),
    SimpleEntry::new(0x2204, "PQI T10/BSR INCITS 490 revision 6"),
    SimpleEntry::new(0x2206, "PQI T10/BSR INCITS 490 revision 7"),
    SimpleEntry::new(0x2208, "PQI INCITS 490-2014"),
    SimpleEntry::new(0x2220, "SOP-2 (no draft published)"),
    SimpleEntry::new(0x2240, "PQI-2 (no version claimed)"),
    SimpleEntry::new(0x2242, "PQI-2 T10/BSR INCITS 507 revision 01"),
    SimpleEntry::new(0x2244, "PQI-2 INCITS 507-2016"),
    SimpleEntry::new(0x2460, "ADT-4 (no version claimed)"),
    SimpleEntry::new(0x246b, "ADT-4 INCITS 541-2023"),
    SimpleEntry::new(0xffc0, "IEEE 1667 (no version claimed)"),
    SimpleEntry::new(0xffc1, "IEEE 1667-2006"),
    SimpleEntry::new(0xffc2, "IEEE 1667-2009"),
    SimpleEntry::new(0xffc3, "IEEE 1667-2015"),
    SimpleEntry::new(0xffc4, "IEEE 1667-2018"),
];
