//! Primitive color ramps.
//!
//! Each hue runs from 50 (lightest) to 900 (darkest) in ten stops. The
//! [`dark`] submodule holds the dark-palette equivalents used by dark
//! themes, where the luminance order is flipped so 50 stays the subtle
//! surface stop. Semantic theme tokens alias into these ramps; the
//! contrast classification tables enumerate specific stops.

pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";

pub const GRAY_50: &str = "#f6f6f6";
pub const GRAY_100: &str = "#eeeeee";
pub const GRAY_200: &str = "#e2e2e2";
pub const GRAY_300: &str = "#cbcbcb";
pub const GRAY_400: &str = "#afafaf";
pub const GRAY_500: &str = "#878787";
pub const GRAY_600: &str = "#6b6b6b";
pub const GRAY_700: &str = "#545454";
pub const GRAY_800: &str = "#333333";
pub const GRAY_900: &str = "#1f1f1f";

pub const RED_50: &str = "#fdf0ef";
pub const RED_100: &str = "#fadbd7";
pub const RED_200: &str = "#f4afa7";
pub const RED_300: &str = "#eb7567";
pub const RED_400: &str = "#e44d38";
pub const RED_500: &str = "#d44333";
pub const RED_600: &str = "#ab3626";
pub const RED_700: &str = "#892f23";
pub const RED_800: &str = "#66251d";
pub const RED_900: &str = "#4c1d17";

pub const ORANGE_50: &str = "#fef3ef";
pub const ORANGE_100: &str = "#fbe2d6";
pub const ORANGE_200: &str = "#f7bfa5";
pub const ORANGE_300: &str = "#f19064";
pub const ORANGE_400: &str = "#ed6f2e";
pub const ORANGE_500: &str = "#d9601a";
pub const ORANGE_600: &str = "#b14f18";
pub const ORANGE_700: &str = "#8e4115";
pub const ORANGE_800: &str = "#6a3311";
pub const ORANGE_900: &str = "#50270e";

pub const AMBER_50: &str = "#fdf7e3";
pub const AMBER_100: &str = "#faeec2";
pub const AMBER_200: &str = "#f4dc8f";
pub const AMBER_300: &str = "#edc543";
pub const AMBER_400: &str = "#e0b01c";
pub const AMBER_500: &str = "#c29b16";
pub const AMBER_600: &str = "#9c7d14";
pub const AMBER_700: &str = "#7c6411";
pub const AMBER_800: &str = "#5c4b0e";
pub const AMBER_900: &str = "#45390b";

pub const YELLOW_50: &str = "#fefae1";
pub const YELLOW_100: &str = "#fcf3bd";
pub const YELLOW_200: &str = "#f9e981";
pub const YELLOW_300: &str = "#f5d943";
pub const YELLOW_400: &str = "#efc714";
pub const YELLOW_500: &str = "#d6b212";
pub const YELLOW_600: &str = "#ac8f0f";
pub const YELLOW_700: &str = "#89720d";
pub const YELLOW_800: &str = "#66550a";
pub const YELLOW_900: &str = "#4d4008";

pub const LIME_50: &str = "#f3f9e8";
pub const LIME_100: &str = "#e3f2c8";
pub const LIME_200: &str = "#c7e591";
pub const LIME_300: &str = "#a3d355";
pub const LIME_400: &str = "#84bf26";
pub const LIME_500: &str = "#75a921";
pub const LIME_600: &str = "#5f8a1b";
pub const LIME_700: &str = "#4c6e16";
pub const LIME_800: &str = "#395311";
pub const LIME_900: &str = "#2b3e0d";

pub const GREEN_50: &str = "#ebf8f2";
pub const GREEN_100: &str = "#cdeede";
pub const GREEN_200: &str = "#96dcba";
pub const GREEN_300: &str = "#54c392";
pub const GREEN_400: &str = "#16a871";
pub const GREEN_500: &str = "#109664";
pub const GREEN_600: &str = "#0d7a52";
pub const GREEN_700: &str = "#0b6343";
pub const GREEN_800: &str = "#084b33";
pub const GREEN_900: &str = "#063826";

pub const TEAL_50: &str = "#e9f8fa";
pub const TEAL_100: &str = "#c9eef3";
pub const TEAL_200: &str = "#8cdce6";
pub const TEAL_300: &str = "#45c4d5";
pub const TEAL_400: &str = "#0fabc0";
pub const TEAL_500: &str = "#0d99ac";
pub const TEAL_600: &str = "#0b7c8c";
pub const TEAL_700: &str = "#096472";
pub const TEAL_800: &str = "#074b55";
pub const TEAL_900: &str = "#053840";

pub const BLUE_50: &str = "#eff3fe";
pub const BLUE_100: &str = "#d4e2fc";
pub const BLUE_200: &str = "#a0bff8";
pub const BLUE_300: &str = "#5b91f5";
pub const BLUE_400: &str = "#276ef1";
pub const BLUE_500: &str = "#2360d8";
pub const BLUE_600: &str = "#1c4eb0";
pub const BLUE_700: &str = "#174291";
pub const BLUE_800: &str = "#123166";
pub const BLUE_900: &str = "#0e254d";

pub const COBALT_50: &str = "#ebedfa";
pub const COBALT_100: &str = "#d2d7f0";
pub const COBALT_200: &str = "#949ce3";
pub const COBALT_300: &str = "#535fcf";
pub const COBALT_400: &str = "#0e1fc1";
pub const COBALT_500: &str = "#0c1baa";
pub const COBALT_600: &str = "#0a1688";
pub const COBALT_700: &str = "#081270";
pub const COBALT_800: &str = "#060d52";
pub const COBALT_900: &str = "#050a3e";

pub const PURPLE_50: &str = "#f4f1fa";
pub const PURPLE_100: &str = "#e3ddf2";
pub const PURPLE_200: &str = "#c1b5e3";
pub const PURPLE_300: &str = "#957fce";
pub const PURPLE_400: &str = "#7356bf";
pub const PURPLE_500: &str = "#674dab";
pub const PURPLE_600: &str = "#533f8a";
pub const PURPLE_700: &str = "#453471";
pub const PURPLE_800: &str = "#332753";
pub const PURPLE_900: &str = "#261d3f";

pub const MAGENTA_50: &str = "#fdf0f6";
pub const MAGENTA_100: &str = "#f9dae8";
pub const MAGENTA_200: &str = "#f2abcd";
pub const MAGENTA_300: &str = "#e96ba6";
pub const MAGENTA_400: &str = "#e23d8b";
pub const MAGENTA_500: &str = "#ca377c";
pub const MAGENTA_600: &str = "#a42c65";
pub const MAGENTA_700: &str = "#852452";
pub const MAGENTA_800: &str = "#641b3e";
pub const MAGENTA_900: &str = "#4a142e";

pub const BROWN_50: &str = "#f6f0ea";
pub const BROWN_100: &str = "#ebddd1";
pub const BROWN_200: &str = "#d2bba3";
pub const BROWN_300: &str = "#b6917b";
pub const BROWN_400: &str = "#99644c";
pub const BROWN_500: &str = "#875940";
pub const BROWN_600: &str = "#744c34";
pub const BROWN_700: &str = "#5e3e2b";
pub const BROWN_800: &str = "#472f20";
pub const BROWN_900: &str = "#362418";

pub const PLATINUM_50: &str = "#f4fafb";
pub const PLATINUM_100: &str = "#e1f0f3";
pub const PLATINUM_200: &str = "#c2dde2";
pub const PLATINUM_300: &str = "#a2c7cd";
pub const PLATINUM_400: &str = "#84aeb5";
pub const PLATINUM_500: &str = "#5f8e96";
pub const PLATINUM_600: &str = "#4e7d85";
pub const PLATINUM_700: &str = "#3e666d";
pub const PLATINUM_800: &str = "#2e4d52";
pub const PLATINUM_900: &str = "#233a3e";

/// Dark-palette ramps. Stop 50 is the subtle surface stop in dark mode,
/// so luminance runs the opposite way from the light palette.
pub mod dark {
    pub const GRAY_50: &str = "#1e1e1e";
    pub const GRAY_100: &str = "#292929";
    pub const GRAY_200: &str = "#343434";
    pub const GRAY_300: &str = "#424242";
    pub const GRAY_400: &str = "#555555";
    pub const GRAY_500: &str = "#6e6e6e";
    pub const GRAY_600: &str = "#8a8a8a";
    pub const GRAY_700: &str = "#a6a6a6";
    pub const GRAY_800: &str = "#c4c4c4";
    pub const GRAY_900: &str = "#e0e0e0";

    pub const RED_50: &str = "#301410";
    pub const RED_100: &str = "#421b15";
    pub const RED_200: &str = "#57231b";
    pub const RED_300: &str = "#732e23";
    pub const RED_400: &str = "#953c2e";
    pub const RED_500: &str = "#b84a39";
    pub const RED_600: &str = "#d06350";
    pub const RED_700: &str = "#de8271";
    pub const RED_800: &str = "#eaa79b";
    pub const RED_900: &str = "#f4cdc6";

    pub const ORANGE_50: &str = "#331c0d";
    pub const ORANGE_100: &str = "#452511";
    pub const ORANGE_200: &str = "#5b3116";
    pub const ORANGE_300: &str = "#78401d";
    pub const ORANGE_400: &str = "#9b5325";
    pub const ORANGE_500: &str = "#c0672e";
    pub const ORANGE_600: &str = "#d57f42";
    pub const ORANGE_700: &str = "#e09a65";
    pub const ORANGE_800: &str = "#ecbc95";
    pub const ORANGE_900: &str = "#f6dcc5";

    pub const AMBER_50: &str = "#2e2508";
    pub const AMBER_100: &str = "#3e320b";
    pub const AMBER_200: &str = "#52420e";
    pub const AMBER_300: &str = "#6b5712";
    pub const AMBER_400: &str = "#8a7017";
    pub const AMBER_500: &str = "#ab8b1c";
    pub const AMBER_600: &str = "#c5a430";
    pub const AMBER_700: &str = "#d4b957";
    pub const AMBER_800: &str = "#e4d08a";
    pub const AMBER_900: &str = "#f1e4bd";

    pub const YELLOW_50: &str = "#302808";
    pub const YELLOW_100: &str = "#42370b";
    pub const YELLOW_200: &str = "#57490e";
    pub const YELLOW_300: &str = "#735f12";
    pub const YELLOW_400: &str = "#947b17";
    pub const YELLOW_500: &str = "#b7981c";
    pub const YELLOW_600: &str = "#ceae2f";
    pub const YELLOW_700: &str = "#dbc156";
    pub const YELLOW_800: &str = "#e9d689";
    pub const YELLOW_900: &str = "#f4e8bc";

    pub const LIME_50: &str = "#1c2a0c";
    pub const LIME_100: &str = "#263a10";
    pub const LIME_200: &str = "#334d15";
    pub const LIME_300: &str = "#43651b";
    pub const LIME_400: &str = "#568223";
    pub const LIME_500: &str = "#6aa02b";
    pub const LIME_600: &str = "#82b841";
    pub const LIME_700: &str = "#9dc866";
    pub const LIME_800: &str = "#bfdb96";
    pub const LIME_900: &str = "#ddecc4";

    pub const GREEN_50: &str = "#0a2a1e";
    pub const GREEN_100: &str = "#0e3a29";
    pub const GREEN_200: &str = "#124d37";
    pub const GREEN_300: &str = "#186548";
    pub const GREEN_400: &str = "#1f825d";
    pub const GREEN_500: &str = "#27a073";
    pub const GREEN_600: &str = "#3db88a";
    pub const GREEN_700: &str = "#63c8a2";
    pub const GREEN_800: &str = "#94dbc0";
    pub const GREEN_900: &str = "#c3ecdd";

    pub const TEAL_50: &str = "#0a282e";
    pub const TEAL_100: &str = "#0e373f";
    pub const TEAL_200: &str = "#124954";
    pub const TEAL_300: &str = "#18606e";
    pub const TEAL_400: &str = "#1f7c8d";
    pub const TEAL_500: &str = "#2799ae";
    pub const TEAL_600: &str = "#3db1c5";
    pub const TEAL_700: &str = "#63c2d3";
    pub const TEAL_800: &str = "#94d7e2";
    pub const TEAL_900: &str = "#c3e9f0";

    pub const BLUE_50: &str = "#0e1b33";
    pub const BLUE_100: &str = "#132546";
    pub const BLUE_200: &str = "#1a315d";
    pub const BLUE_300: &str = "#22417a";
    pub const BLUE_400: &str = "#2c549d";
    pub const BLUE_500: &str = "#3768c2";
    pub const BLUE_600: &str = "#4f80d7";
    pub const BLUE_700: &str = "#719ae1";
    pub const BLUE_800: &str = "#9fbbec";
    pub const BLUE_900: &str = "#cbd9f5";

    pub const COBALT_50: &str = "#0b0f2e";
    pub const COBALT_100: &str = "#0f153f";
    pub const COBALT_200: &str = "#141c53";
    pub const COBALT_300: &str = "#1a246d";
    pub const COBALT_400: &str = "#222f8c";
    pub const COBALT_500: &str = "#2b3bad";
    pub const COBALT_600: &str = "#4250c4";
    pub const COBALT_700: &str = "#6672d2";
    pub const COBALT_800: &str = "#959ee2";
    pub const COBALT_900: &str = "#c6cbf0";

    pub const PURPLE_50: &str = "#1d1630";
    pub const PURPLE_100: &str = "#281e42";
    pub const PURPLE_200: &str = "#352857";
    pub const PURPLE_300: &str = "#453572";
    pub const PURPLE_400: &str = "#594591";
    pub const PURPLE_500: &str = "#6d55b2";
    pub const PURPLE_600: &str = "#846dc6";
    pub const PURPLE_700: &str = "#9f8bd4";
    pub const PURPLE_800: &str = "#c0b2e3";
    pub const PURPLE_900: &str = "#ded7f1";

    pub const MAGENTA_50: &str = "#2e0f1f";
    pub const MAGENTA_100: &str = "#3f142b";
    pub const MAGENTA_200: &str = "#531b39";
    pub const MAGENTA_300: &str = "#6d244b";
    pub const MAGENTA_400: &str = "#8c2f61";
    pub const MAGENTA_500: &str = "#ac3b78";
    pub const MAGENTA_600: &str = "#c45592";
    pub const MAGENTA_700: &str = "#d377aa";
    pub const MAGENTA_800: &str = "#e3a3c6";
    pub const MAGENTA_900: &str = "#f0cde1";

    pub const BROWN_50: &str = "#241811";
    pub const BROWN_100: &str = "#322117";
    pub const BROWN_200: &str = "#422c1e";
    pub const BROWN_300: &str = "#573a28";
    pub const BROWN_400: &str = "#704b34";
    pub const BROWN_500: &str = "#8a5d41";
    pub const BROWN_600: &str = "#a37355";
    pub const BROWN_700: &str = "#b78e74";
    pub const BROWN_800: &str = "#cfb09c";
    pub const BROWN_900: &str = "#e5d3c6";

    pub const PLATINUM_50: &str = "#0f1e21";
    pub const PLATINUM_100: &str = "#15282c";
    pub const PLATINUM_200: &str = "#1c353a";
    pub const PLATINUM_300: &str = "#25464c";
    pub const PLATINUM_400: &str = "#305a61";
    pub const PLATINUM_500: &str = "#3c6f78";
    pub const PLATINUM_600: &str = "#54868e";
    pub const PLATINUM_700: &str = "#749ca3";
    pub const PLATINUM_800: &str = "#9dbcc1";
    pub const PLATINUM_900: &str = "#c9dce0";

    /// Every dark-palette value, for membership checks.
    pub const VALUES: &[&str] = &[
        super::WHITE,
        super::BLACK,
        GRAY_50, GRAY_100, GRAY_200, GRAY_300, GRAY_400,
        GRAY_500, GRAY_600, GRAY_700, GRAY_800, GRAY_900,
        RED_50, RED_100, RED_200, RED_300, RED_400,
        RED_500, RED_600, RED_700, RED_800, RED_900,
        ORANGE_50, ORANGE_100, ORANGE_200, ORANGE_300, ORANGE_400,
        ORANGE_500, ORANGE_600, ORANGE_700, ORANGE_800, ORANGE_900,
        AMBER_50, AMBER_100, AMBER_200, AMBER_300, AMBER_400,
        AMBER_500, AMBER_600, AMBER_700, AMBER_800, AMBER_900,
        YELLOW_50, YELLOW_100, YELLOW_200, YELLOW_300, YELLOW_400,
        YELLOW_500, YELLOW_600, YELLOW_700, YELLOW_800, YELLOW_900,
        LIME_50, LIME_100, LIME_200, LIME_300, LIME_400,
        LIME_500, LIME_600, LIME_700, LIME_800, LIME_900,
        GREEN_50, GREEN_100, GREEN_200, GREEN_300, GREEN_400,
        GREEN_500, GREEN_600, GREEN_700, GREEN_800, GREEN_900,
        TEAL_50, TEAL_100, TEAL_200, TEAL_300, TEAL_400,
        TEAL_500, TEAL_600, TEAL_700, TEAL_800, TEAL_900,
        BLUE_50, BLUE_100, BLUE_200, BLUE_300, BLUE_400,
        BLUE_500, BLUE_600, BLUE_700, BLUE_800, BLUE_900,
        COBALT_50, COBALT_100, COBALT_200, COBALT_300, COBALT_400,
        COBALT_500, COBALT_600, COBALT_700, COBALT_800, COBALT_900,
        PURPLE_50, PURPLE_100, PURPLE_200, PURPLE_300, PURPLE_400,
        PURPLE_500, PURPLE_600, PURPLE_700, PURPLE_800, PURPLE_900,
        MAGENTA_50, MAGENTA_100, MAGENTA_200, MAGENTA_300, MAGENTA_400,
        MAGENTA_500, MAGENTA_600, MAGENTA_700, MAGENTA_800, MAGENTA_900,
        BROWN_50, BROWN_100, BROWN_200, BROWN_300, BROWN_400,
        BROWN_500, BROWN_600, BROWN_700, BROWN_800, BROWN_900,
        PLATINUM_50, PLATINUM_100, PLATINUM_200, PLATINUM_300, PLATINUM_400,
        PLATINUM_500, PLATINUM_600, PLATINUM_700, PLATINUM_800, PLATINUM_900,
    ];
}
