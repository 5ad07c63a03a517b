mod execute;
pub(crate) mod oracles;
