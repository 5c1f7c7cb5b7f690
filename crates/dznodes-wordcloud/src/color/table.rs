//! Anchor colours of the built-in colour maps.
//!
//! Continuous maps list evenly spaced anchors that are interpolated linearly.
//! Qualitative maps list their discrete colours.

use super::colormap::{ColormapSpec, Interpolation};

pub(super) const COLORMAPS: &[ColormapSpec] = &[
    ColormapSpec {
        name: "viridis",
        kind: Interpolation::Linear,
        stops: &[
            0x440154, 0x482878, 0x3e4989, 0x31688e, 0x26828e, 0x1f9e89, 0x35b779, 0x6ece58,
            0xb5de2b, 0xfde725,
        ],
    },
    ColormapSpec {
        name: "Accent",
        kind: Interpolation::Listed,
        stops: &[0x7fc97f, 0xbeaed4, 0xfdc086, 0xffff99, 0x386cb0, 0xf0027f, 0xbf5b17, 0x666666],
    },
    ColormapSpec {
        name: "Blues",
        kind: Interpolation::Linear,
        stops: &[
            0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c,
            0x08306b,
        ],
    },
    ColormapSpec {
        name: "BrBG",
        kind: Interpolation::Linear,
        stops: &[
            0x543005, 0x8c510a, 0xbf812d, 0xdfc27d, 0xf6e8c3, 0xf5f5f5, 0xc7eae5, 0x80cdc1,
            0x35978f, 0x01665e, 0x003c30,
        ],
    },
    ColormapSpec {
        name: "BuGn",
        kind: Interpolation::Linear,
        stops: &[
            0xf7fcfd, 0xe5f5f9, 0xccece6, 0x99d8c9, 0x66c2a4, 0x41ae76, 0x238b45, 0x006d2c,
            0x00441b,
        ],
    },
    ColormapSpec {
        name: "BuPu",
        kind: Interpolation::Linear,
        stops: &[
            0xf7fcfd, 0xe0ecf4, 0xbfd3e6, 0x9ebcda, 0x8c96c6, 0x8c6bb1, 0x88419d, 0x810f7c,
            0x4d004b,
        ],
    },
    ColormapSpec {
        name: "CMRmap",
        kind: Interpolation::Linear,
        stops: &[
            0x000000, 0x26267f, 0x4c26bf, 0x993399, 0xff3340, 0xe6590e, 0xe5991a, 0xe5cc4c,
            0xe6e6cc, 0xffffff,
        ],
    },
    ColormapSpec {
        name: "Dark2",
        kind: Interpolation::Listed,
        stops: &[0x1b9e77, 0xd95f02, 0x7570b3, 0xe7298a, 0x66a61e, 0xe6ab02, 0xa6761d, 0x666666],
    },
    ColormapSpec {
        name: "GnBu",
        kind: Interpolation::Linear,
        stops: &[
            0xf7fcf0, 0xe0f3db, 0xccebc5, 0xa8ddb5, 0x7bccc4, 0x4eb3d3, 0x2b8cbe, 0x0868ac,
            0x084081,
        ],
    },
    ColormapSpec {
        name: "Grays",
        kind: Interpolation::Linear,
        stops: &[
            0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525,
            0x000000,
        ],
    },
    ColormapSpec {
        name: "Greens",
        kind: Interpolation::Linear,
        stops: &[
            0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c,
            0x00441b,
        ],
    },
    ColormapSpec {
        name: "OrRd",
        kind: Interpolation::Linear,
        stops: &[
            0xfff7ec, 0xfee8c8, 0xfdd49e, 0xfdbb84, 0xfc8d59, 0xef6548, 0xd7301f, 0xb30000,
            0x7f0000,
        ],
    },
    ColormapSpec {
        name: "Oranges",
        kind: Interpolation::Linear,
        stops: &[
            0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c, 0xf16913, 0xd94801, 0xa63603,
            0x7f2704,
        ],
    },
    ColormapSpec {
        name: "PRGn",
        kind: Interpolation::Linear,
        stops: &[
            0x40004b, 0x762a83, 0x9970ab, 0xc2a5cf, 0xe7d4e8, 0xf7f7f7, 0xd9f0d3, 0xa6dba0,
            0x5aae61, 0x1b7837, 0x00441b,
        ],
    },
    ColormapSpec {
        name: "Paired",
        kind: Interpolation::Listed,
        stops: &[
            0xa6cee3, 0x1f78b4, 0xb2df8a, 0x33a02c, 0xfb9a99, 0xe31a1c, 0xfdbf6f, 0xff7f00,
            0xcab2d6, 0x6a3d9a, 0xffff99, 0xb15928,
        ],
    },
    ColormapSpec {
        name: "Pastel1",
        kind: Interpolation::Listed,
        stops: &[
            0xfbb4ae, 0xb3cde3, 0xccebc5, 0xdecbe4, 0xfed9a6, 0xffffcc, 0xe5d8bd, 0xfddaec,
            0xf2f2f2,
        ],
    },
    ColormapSpec {
        name: "Pastel2",
        kind: Interpolation::Listed,
        stops: &[0xb3e2cd, 0xfdcdac, 0xcbd5e8, 0xf4cae4, 0xe6f5c9, 0xfff2ae, 0xf1e2cc, 0xcccccc],
    },
    ColormapSpec {
        name: "PiYG",
        kind: Interpolation::Linear,
        stops: &[
            0x8e0152, 0xc51b7d, 0xde77ae, 0xf1b6da, 0xfde0ef, 0xf7f7f7, 0xe6f5d0, 0xb8e186,
            0x7fbc41, 0x4d9221, 0x276419,
        ],
    },
    ColormapSpec {
        name: "PuBu",
        kind: Interpolation::Linear,
        stops: &[
            0xfff7fb, 0xece7f2, 0xd0d1e6, 0xa6bddb, 0x74a9cf, 0x3690c0, 0x0570b0, 0x045a8d,
            0x023858,
        ],
    },
    ColormapSpec {
        name: "PuBuGn",
        kind: Interpolation::Linear,
        stops: &[
            0xfff7fb, 0xece2f0, 0xd0d1e6, 0xa6bddb, 0x67a9cf, 0x3690c0, 0x02818a, 0x016c59,
            0x014636,
        ],
    },
    ColormapSpec {
        name: "PuOr",
        kind: Interpolation::Linear,
        stops: &[
            0x7f3b08, 0xb35806, 0xe08214, 0xfdb863, 0xfee0b6, 0xf7f7f7, 0xd8daeb, 0xb2abd2,
            0x8073ac, 0x542788, 0x2d004b,
        ],
    },
    ColormapSpec {
        name: "PuRd",
        kind: Interpolation::Linear,
        stops: &[
            0xf7f4f9, 0xe7e1ef, 0xd4b9da, 0xc994c7, 0xdf65b0, 0xe7298a, 0xce1256, 0x980043,
            0x67001f,
        ],
    },
    ColormapSpec {
        name: "Purples",
        kind: Interpolation::Linear,
        stops: &[
            0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8, 0x807dba, 0x6a51a3, 0x54278f,
            0x3f007d,
        ],
    },
    ColormapSpec {
        name: "RdBu",
        kind: Interpolation::Linear,
        stops: &[
            0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7, 0xd1e5f0, 0x92c5de,
            0x4393c3, 0x2166ac, 0x053061,
        ],
    },
    ColormapSpec {
        name: "RdGy",
        kind: Interpolation::Linear,
        stops: &[
            0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xffffff, 0xe0e0e0, 0xbababa,
            0x878787, 0x4d4d4d, 0x1a1a1a,
        ],
    },
    ColormapSpec {
        name: "RdPu",
        kind: Interpolation::Linear,
        stops: &[
            0xfff7f3, 0xfde0dd, 0xfcc5c0, 0xfa9fb5, 0xf768a1, 0xdd3497, 0xae017e, 0x7a0177,
            0x49006a,
        ],
    },
    ColormapSpec {
        name: "RdYlBu",
        kind: Interpolation::Linear,
        stops: &[
            0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee090, 0xffffbf, 0xe0f3f8, 0xabd9e9,
            0x74add1, 0x4575b4, 0x313695,
        ],
    },
    ColormapSpec {
        name: "RdYlGn",
        kind: Interpolation::Linear,
        stops: &[
            0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xd9ef8b, 0xa6d96a,
            0x66bd63, 0x1a9850, 0x006837,
        ],
    },
    ColormapSpec {
        name: "Reds",
        kind: Interpolation::Linear,
        stops: &[
            0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15,
            0x67000d,
        ],
    },
    ColormapSpec {
        name: "Set1",
        kind: Interpolation::Listed,
        stops: &[
            0xe41a1c, 0x377eb8, 0x4daf4a, 0x984ea3, 0xff7f00, 0xffff33, 0xa65628, 0xf781bf,
            0x999999,
        ],
    },
    ColormapSpec {
        name: "Set2",
        kind: Interpolation::Listed,
        stops: &[0x66c2a5, 0xfc8d62, 0x8da0cb, 0xe78ac3, 0xa6d854, 0xffd92f, 0xe5c494, 0xb3b3b3],
    },
    ColormapSpec {
        name: "Set3",
        kind: Interpolation::Listed,
        stops: &[
            0x8dd3c7, 0xffffb3, 0xbebada, 0xfb8072, 0x80b1d3, 0xfdb462, 0xb3de69, 0xfccde5,
            0xd9d9d9, 0xbc80bd, 0xccebc5, 0xffed6f,
        ],
    },
    ColormapSpec {
        name: "Spectral",
        kind: Interpolation::Linear,
        stops: &[
            0x9e0142, 0xd53e4f, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xe6f598, 0xabdda4,
            0x66c2a5, 0x3288bd, 0x5e4fa2,
        ],
    },
    ColormapSpec {
        name: "Wistia",
        kind: Interpolation::Linear,
        stops: &[0xe4ff7a, 0xffe81a, 0xffbd00, 0xffa000, 0xfc7f00],
    },
    ColormapSpec {
        name: "YlGn",
        kind: Interpolation::Linear,
        stops: &[
            0xffffe5, 0xf7fcb9, 0xd9f0a3, 0xaddd8e, 0x78c679, 0x41ab5d, 0x238443, 0x006837,
            0x004529,
        ],
    },
    ColormapSpec {
        name: "YlGnBu",
        kind: Interpolation::Linear,
        stops: &[
            0xffffd9, 0xedf8b1, 0xc7e9b4, 0x7fcdbb, 0x41b6c4, 0x1d91c0, 0x225ea8, 0x253494,
            0x081d58,
        ],
    },
    ColormapSpec {
        name: "YlOrBr",
        kind: Interpolation::Linear,
        stops: &[
            0xffffe5, 0xfff7bc, 0xfee391, 0xfec44f, 0xfe9929, 0xec7014, 0xcc4c02, 0x993404,
            0x662506,
        ],
    },
    ColormapSpec {
        name: "YlOrRd",
        kind: Interpolation::Linear,
        stops: &[
            0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a, 0xe31a1c, 0xbd0026,
            0x800026,
        ],
    },
    ColormapSpec {
        name: "afmhot",
        kind: Interpolation::Linear,
        stops: &[0x000000, 0x800000, 0xff8000, 0xffff80, 0xffffff],
    },
    ColormapSpec {
        name: "autumn",
        kind: Interpolation::Linear,
        stops: &[0xff0000, 0xffff00],
    },
    ColormapSpec {
        name: "binary",
        kind: Interpolation::Linear,
        stops: &[0xffffff, 0x000000],
    },
    ColormapSpec {
        name: "bone",
        kind: Interpolation::Linear,
        stops: &[0x000000, 0x545474, 0xa7c7c7, 0xffffff],
    },
    ColormapSpec {
        name: "brg",
        kind: Interpolation::Linear,
        stops: &[0x0000ff, 0xff0000, 0x00ff00],
    },
    ColormapSpec {
        name: "bwr",
        kind: Interpolation::Linear,
        stops: &[0x0000ff, 0xffffff, 0xff0000],
    },
    ColormapSpec {
        name: "cividis",
        kind: Interpolation::Linear,
        stops: &[
            0x00224e, 0x123570, 0x3b496c, 0x575d6d, 0x707173, 0x8a8779, 0xa69d75, 0xc4b56c,
            0xe4cf5b, 0xfee838,
        ],
    },
    ColormapSpec {
        name: "cool",
        kind: Interpolation::Linear,
        stops: &[0x00ffff, 0xff00ff],
    },
    ColormapSpec {
        name: "coolwarm",
        kind: Interpolation::Linear,
        stops: &[0x3b4cc0, 0x7396f5, 0xb0cbfc, 0xdcdddd, 0xf6bfa6, 0xea7b60, 0xb40426],
    },
    ColormapSpec {
        name: "copper",
        kind: Interpolation::Linear,
        stops: &[0x000000, 0x50321f, 0x9f643f, 0xef955f, 0xffc77f],
    },
    ColormapSpec {
        name: "cubehelix",
        kind: Interpolation::Linear,
        stops: &[
            0x000000, 0x1a1530, 0x163d4e, 0x1f6642, 0x54792f, 0xa07949, 0xd07e93, 0xcf9cda,
            0xc1caf3, 0xd2eeef, 0xffffff,
        ],
    },
    ColormapSpec {
        name: "flag",
        kind: Interpolation::Linear,
        stops: &[
            0xff0000, 0xffffff, 0x0000ff, 0x000000, 0xff0000, 0xffffff, 0x0000ff, 0x000000,
            0xff0000, 0xffffff, 0x0000ff, 0x000000, 0xff0000, 0xffffff, 0x0000ff, 0x000000,
        ],
    },
    ColormapSpec {
        name: "gist_earth",
        kind: Interpolation::Linear,
        stops: &[0x000000, 0x2a4880, 0x3e8a7d, 0x5aa255, 0xa7b163, 0xb8a07a, 0xd9c3b4, 0xfdfbfb],
    },
    ColormapSpec {
        name: "gist_gray",
        kind: Interpolation::Linear,
        stops: &[0x000000, 0xffffff],
    },
    ColormapSpec {
        name: "gist_grey",
        kind: Interpolation::Linear,
        stops: &[0x000000, 0xffffff],
    },
    ColormapSpec {
        name: "gist_heat",
        kind: Interpolation::Linear,
        stops: &[0x000000, 0x600000, 0xbf0000, 0xff8000, 0xffffff],
    },
    ColormapSpec {
        name: "gist_ncar",
        kind: Interpolation::Linear,
        stops: &[
            0x000080, 0x0060ff, 0x00ffff, 0x00ff60, 0x80ff00, 0xffff00, 0xff8000, 0xff0000,
            0xff00ff, 0xfef8fe,
        ],
    },
    ColormapSpec {
        name: "gist_rainbow",
        kind: Interpolation::Linear,
        stops: &[0xff0029, 0xffd300, 0x5cff00, 0x00ff7b, 0x00cbff, 0x0e00ff, 0xff00bf],
    },
    ColormapSpec {
        name: "gist_stern",
        kind: Interpolation::Linear,
        stops: &[0x000000, 0xe5004c, 0x4060c0, 0x8080a0, 0xa0a060, 0xc0c020, 0xffffff],
    },
    ColormapSpec {
        name: "gist_yarg",
        kind: Interpolation::Linear,
        stops: &[0xffffff, 0x000000],
    },
    // Offered in the menu but has no colours, so lookups reject it.
    ColormapSpec {
        name: "gist_yerg",
        kind: Interpolation::Linear,
        stops: &[],
    },
    ColormapSpec {
        name: "gnuplot",
        kind: Interpolation::Linear,
        stops: &[0x000000, 0x8004ff, 0xb42000, 0xdd6c00, 0xffff00],
    },
    ColormapSpec {
        name: "gnuplot2",
        kind: Interpolation::Linear,
        stops: &[0x000000, 0x1c00b4, 0x6b00ff, 0xd53ffb, 0xff9f60, 0xffff00, 0xffffff],
    },
    ColormapSpec {
        name: "hot",
        kind: Interpolation::Linear,
        stops: &[0x000000, 0xae0000, 0xff5f00, 0xffff30, 0xffffff],
    },
    ColormapSpec {
        name: "hsv",
        kind: Interpolation::Linear,
        stops: &[0xff0000, 0xffff00, 0x00ff00, 0x00ffff, 0x0000ff, 0xff00ff, 0xff0000],
    },
    ColormapSpec {
        name: "inferno",
        kind: Interpolation::Linear,
        stops: &[
            0x000004, 0x1b0c41, 0x4a0c6b, 0x781c6d, 0xa52c60, 0xcf4446, 0xed6925, 0xfb9b06,
            0xf7d13d, 0xfcffa4,
        ],
    },
    ColormapSpec {
        name: "jet",
        kind: Interpolation::Linear,
        stops: &[
            0x00007f, 0x0000ff, 0x007fff, 0x00ffff, 0x7fff7f, 0xffff00, 0xff7f00, 0xff0000,
            0x7f0000,
        ],
    },
    ColormapSpec {
        name: "magma",
        kind: Interpolation::Linear,
        stops: &[
            0x000004, 0x180f3d, 0x440f76, 0x721f81, 0x9e2f7f, 0xcd4071, 0xf1605d, 0xfd9668,
            0xfeca8d, 0xfcfdbf,
        ],
    },
    ColormapSpec {
        name: "nipy_spectral",
        kind: Interpolation::Linear,
        stops: &[
            0x000000, 0x7f0088, 0x0000dd, 0x0099dd, 0x00a988, 0x00bb00, 0x00ff00, 0xccf900,
            0xffcc00, 0xff0000, 0xcccccc,
        ],
    },
    ColormapSpec {
        name: "ocean",
        kind: Interpolation::Linear,
        stops: &[0x007f00, 0x00264c, 0x0055aa, 0x5599d4, 0xffffff],
    },
    ColormapSpec {
        name: "pink",
        kind: Interpolation::Linear,
        stops: &[0x1e0000, 0xb07c7c, 0xd2b48c, 0xe8e8b4, 0xffffff],
    },
    ColormapSpec {
        name: "plasma",
        kind: Interpolation::Linear,
        stops: &[
            0x0d0887, 0x46039f, 0x7201a8, 0x9c179e, 0xbd3786, 0xd8576b, 0xed7953, 0xfb9f3a,
            0xfdca26, 0xf0f921,
        ],
    },
    ColormapSpec {
        name: "prism",
        kind: Interpolation::Linear,
        stops: &[
            0xff0000, 0xffff00, 0x00ff00, 0x0000ff, 0xff00ff, 0xff0000, 0xffff00, 0x00ff00,
            0x0000ff, 0xff00ff, 0xff0000, 0xffff00, 0x00ff00, 0x0000ff, 0xff00ff,
        ],
    },
    ColormapSpec {
        name: "rainbow",
        kind: Interpolation::Linear,
        stops: &[
            0x8000ff, 0x4062fa, 0x00b5eb, 0x40ecd4, 0x80ffb4, 0xc0eb8d, 0xffb462, 0xff6230,
            0xff0000,
        ],
    },
    ColormapSpec {
        name: "seismic",
        kind: Interpolation::Linear,
        stops: &[0x00004c, 0x0000ff, 0xffffff, 0xff0000, 0x800000],
    },
    ColormapSpec {
        name: "spring",
        kind: Interpolation::Linear,
        stops: &[0xff00ff, 0xffff00],
    },
    ColormapSpec {
        name: "summer",
        kind: Interpolation::Linear,
        stops: &[0x008066, 0xffff66],
    },
    ColormapSpec {
        name: "tab10",
        kind: Interpolation::Listed,
        stops: &[
            0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f,
            0xbcbd22, 0x17becf,
        ],
    },
    ColormapSpec {
        name: "tab20",
        kind: Interpolation::Listed,
        stops: &[
            0x1f77b4, 0xaec7e8, 0xff7f0e, 0xffbb78, 0x2ca02c, 0x98df8a, 0xd62728, 0xff9896,
            0x9467bd, 0xc5b0d5, 0x8c564b, 0xc49c94, 0xe377c2, 0xf7b6d2, 0x7f7f7f, 0xc7c7c7,
            0xbcbd22, 0xdbdb8d, 0x17becf, 0x9edae5,
        ],
    },
    ColormapSpec {
        name: "tab20b",
        kind: Interpolation::Listed,
        stops: &[
            0x393b79, 0x5254a3, 0x6b6ecf, 0x9c9ede, 0x637939, 0x8ca252, 0xb5cf6b, 0xcedb9c,
            0x8c6d31, 0xbd9e39, 0xe7ba52, 0xe7cb94, 0x843c39, 0xad494a, 0xd6616b, 0xe7969c,
            0x7b4173, 0xa55194, 0xce6dbd, 0xde9ed6,
        ],
    },
    ColormapSpec {
        name: "tab20c",
        kind: Interpolation::Listed,
        stops: &[
            0x3182bd, 0x6baed6, 0x9ecae1, 0xc6dbef, 0xe6550d, 0xfd8d3c, 0xfdae6b, 0xfdd0a2,
            0x31a354, 0x74c476, 0xa1d99b, 0xc7e9c0, 0x756bb1, 0x9e9ac8, 0xbcbddc, 0xdadaeb,
            0x636363, 0x969696, 0xbdbdbd, 0xd9d9d9,
        ],
    },
    ColormapSpec {
        name: "terrain",
        kind: Interpolation::Linear,
        stops: &[0x333399, 0x00b3b2, 0x99eb85, 0xcbbb7d, 0x997d76, 0xffffff],
    },
    ColormapSpec {
        name: "turbo",
        kind: Interpolation::Linear,
        stops: &[
            0x30123b, 0x4145ab, 0x4675ed, 0x39a2fc, 0x1bcfd4, 0x24eca6, 0x61fc6c, 0xa4fc3b,
            0xd1e834, 0xf3c63a, 0xfe9b2d, 0xf36315, 0xd93806, 0xb11901, 0x7a0403,
        ],
    },
    ColormapSpec {
        name: "twilight",
        kind: Interpolation::Linear,
        stops: &[
            0xe2d9e2, 0x9ebbc9, 0x6a8fc4, 0x5e5fbc, 0x5a3296, 0x2f1436, 0x5d1a48, 0x923b4b,
            0xb66a5a, 0xcea38c, 0xe2d9e2,
        ],
    },
    ColormapSpec {
        name: "twilight_shifted",
        kind: Interpolation::Linear,
        stops: &[
            0x2f1436, 0x5a3296, 0x5e5fbc, 0x6a8fc4, 0x9ebbc9, 0xe2d9e2, 0xcea38c, 0xb66a5a,
            0x923b4b, 0x5d1a48, 0x2f1436,
        ],
    },
    ColormapSpec {
        name: "winter",
        kind: Interpolation::Linear,
        stops: &[0x0000ff, 0x00ff80],
    },
];
