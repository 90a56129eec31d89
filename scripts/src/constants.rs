//! Constants used in the deploy scripts

// -------------
// | Addresses |
// -------------

/// The MAHA token contract
pub const MAHA_ADDRESS: &str = "0xedd6ca8a4202d4a36611e2fff109648c4863ae19";

/// The ARTH token contract
pub const ARTH_ADDRESS: &str = "0xe52509181feb30eb4979e29ec70d50fd5c44d590";

/// The USDC token contract
pub const USDC_ADDRESS: &str = "0x2791bca1f2de4661ed88a30c99a7a9449aa84174";

/// The SCLP token contract
pub const SCLP_ADDRESS: &str = "0x2fc711518aae7c87d7002566c5d43b0e5d2b1932";

/// The admin of the upgradeability proxy
pub const PROXY_ADMIN: &str = "0x08FBA75aE48507f4306DaF29ca3b15d6d2Ae5400";

// --------------
// | Deployment |
// --------------

/// The default RPC url
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The number of confirmations to wait for on every transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The maximum number of times the retry helper submits an action
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// The delay between attempts of the retry helper, in milliseconds
pub const DEFAULT_RETRY_DELAY_MS: u64 = 3_000;

/// The name the pool token is initialized with
pub const POOL_TOKEN_NAME: &str = "PoolToken";

/// The symbol the pool token is initialized with
pub const POOL_TOKEN_SYMBOL: &str = "MAHAX-PL";

// -------------
// | Artifacts |
// -------------

/// The default directory containing compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";

/// The extension of artifact and output files
pub const JSON_EXTENSION: &str = "json";

/// The name of the pool token logic contract artifact
pub const POOL_TOKEN_CONTRACT: &str = "PoolToken";

/// The name of the upgradeability proxy contract artifact
pub const PROXY_CONTRACT: &str = "AdminUpgradeabilityProxy";

/// The function the proxy is initialized through
pub const INITIALIZE_FUNCTION: &str = "initialize";

// ----------
// | Output |
// ----------

/// The default directory output records are written to
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// The subdirectory of the output directory holding saved ABIs
pub const ABIS_SUBDIR: &str = "abis";

/// The name of the output record written by the pool token deployment
pub const POOL_TOKEN_OUTPUT_NAME: &str = "PoolToken";

/// The interface recorded for every token in the output record
pub const ERC20_ABI_KIND: &str = "IERC20";

/// The MAHA token key in the output record
pub const MAHA_TOKEN_KEY: &str = "MahaToken";

/// The ARTH token key in the output record
pub const ARTH_KEY: &str = "ARTH";

/// The USDC token key in the output record
pub const USDC_KEY: &str = "USDC";

/// The SCLP token key in the output record
pub const SCLP_KEY: &str = "SCLP";

/// The pool token key in the output record
pub const POOL_TOKEN_KEY: &str = "PoolToken";
