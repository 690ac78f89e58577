mod transform;
pub use transform::{GnuTransform, KeyTransform};

mod env;
pub use env::{env_to_args, env_to_args_default};

mod list;
pub use list::{ArgList, DISCOVERY_HOSTS_FLAG, discovery_flag};
