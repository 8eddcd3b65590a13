//! Public REST base URLs for every supported venue.

pub const BITFLYER_API_URL: &str = "https://api.bitflyer.jp/v1";

pub const POLONIEX_API_URL: &str = "https://poloniex.com";

pub const HUOBI_API_URL: &str = "https://api.huobi.pro";

pub const KUCOIN_API_URL: &str = "https://api.kucoin.com";

pub const LBANK_API_URL: &str = "https://api.lbkex.com";

pub const COBINHOOD_API_URL: &str = "https://api.cobinhood.com";

/// Browser user agent some venues require before they answer public endpoints.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.3; WOW64; Trident/7.0; MAFSJS; rv:11.0) like Gecko";
