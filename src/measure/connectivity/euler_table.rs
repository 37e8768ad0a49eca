/// Per-octant Euler characteristic contributions, indexed by the canonical
/// 8-bit neighborhood pattern.
///
/// The entries encode the digital-topology classification published in
/// Toriwaki J, Yonekura T (2002) Euler Number and Connectivity Indexes of a
/// Three Dimensional Digital Picture. Forma 17: 183-209, and in
/// Lee TC, Kashyap RL, Chu CN (1994) Building Skeleton Models via 3-D
/// Medial Surface/Axis Thinning Algorithms. CVGIP 56: 462-478.
///
/// The values are hand-verified literals and must never be recomputed or
/// derived: any deviation silently corrupts every measurement downstream.
/// Only the 97 canonical patterns reachable through the priority cascade in
/// [`super::euler`] are populated; the remaining patterns stay at 0. Every
/// populated index is odd because the cascade always sets bit 0.
pub(crate) const EULER_LUT: [i8; 256] = build_table();

#[allow(clippy::too_many_lines)]
const fn build_table() -> [i8; 256] {
    let mut table = [0i8; 256];

    table[1] = 1;
    table[7] = -1;
    table[9] = -2;
    table[11] = -1;
    table[13] = -1;

    table[19] = -1;
    table[21] = -1;
    table[23] = -2;
    table[25] = -3;
    table[27] = -2;

    table[29] = -2;
    table[31] = -1;
    table[33] = -2;
    table[35] = -1;
    table[37] = -3;

    table[39] = -2;
    table[41] = -1;
    table[43] = -2;
    table[47] = -1;
    table[49] = -1;

    table[53] = -2;
    table[55] = -1;
    table[59] = -1;
    table[61] = 1;
    table[65] = -2;

    table[67] = -3;
    table[69] = -1;
    table[71] = -2;
    table[73] = -1;
    table[77] = -2;

    table[79] = -1;
    table[81] = -1;
    table[83] = -2;
    table[87] = -1;
    table[91] = 1;

    table[93] = -1;
    table[97] = -1;
    table[103] = 1;
    table[105] = 4;
    table[107] = 3;

    table[109] = 3;
    table[111] = 2;
    table[113] = -2;
    table[115] = -1;
    table[117] = -1;
    table[121] = 3;

    table[123] = 2;
    table[125] = 2;
    table[127] = 1;
    table[129] = -6;
    table[131] = -3;

    table[133] = -3;
    table[137] = -3;
    table[139] = -2;
    table[141] = -2;
    table[143] = -1;

    table[145] = -3;
    table[151] = 3;
    table[155] = 1;
    table[157] = 1;
    table[159] = 2;

    table[161] = -3;
    table[163] = -2;
    table[167] = 1;
    table[171] = -1;
    table[173] = 1;

    table[177] = -2;
    table[179] = -1;
    table[181] = 1;
    table[183] = 2;
    table[185] = 1;

    table[189] = 2;
    table[191] = 1;
    table[193] = -3;
    table[197] = -2;
    table[199] = 1;

    table[203] = 1;
    table[205] = -1;
    table[209] = -2;
    table[211] = 1;
    table[213] = -1;

    table[215] = 2;
    table[217] = 1;
    table[219] = 2;
    table[223] = 1;
    table[227] = 1;

    table[229] = 1;
    table[231] = 2;
    table[233] = 3;
    table[235] = 2;
    table[237] = 2;

    table[239] = 1;
    table[241] = -1;
    table[247] = 1;
    table[249] = 2;
    table[251] = 1;

    table[253] = 1;

    table
}
