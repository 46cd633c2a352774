//! Human-readable-part constants for the CIP-5 Bech32 prefix registry.

pub struct Keys<'a> {
    pub acct_sk: &'a str,
    pub acct_vk: &'a str,
    pub acct_xsk: &'a str,
    pub acct_xvk: &'a str,
    pub acct_shared_sk: &'a str,
    pub acct_shared_vk: &'a str,
    pub acct_shared_xsk: &'a str,
    pub acct_shared_xvk: &'a str,
    pub addr_sk: &'a str,
    pub addr_vk: &'a str,
    pub addr_xsk: &'a str,
    pub addr_xvk: &'a str,
    pub addr_shared_sk: &'a str,
    pub addr_shared_vk: &'a str,
    pub addr_shared_xsk: &'a str,
    pub addr_shared_xvk: &'a str,
    pub kes_sk: &'a str,
    pub kes_vk: &'a str,
    pub policy_sk: &'a str,
    pub policy_vk: &'a str,
    pub pool_sk: &'a str,
    pub pool_vk: &'a str,
    pub root_sk: &'a str,
    pub root_vk: &'a str,
    pub root_xsk: &'a str,
    pub root_xvk: &'a str,
    pub root_shared_sk: &'a str,
    pub root_shared_vk: &'a str,
    pub root_shared_xsk: &'a str,
    pub root_shared_xvk: &'a str,
    pub stake_sk: &'a str,
    pub stake_vk: &'a str,
    pub stake_xsk: &'a str,
    pub stake_xvk: &'a str,
    pub stake_shared_sk: &'a str,
    pub stake_shared_vk: &'a str,
    pub stake_shared_xsk: &'a str,
    pub stake_shared_xvk: &'a str,
    pub vrf_sk: &'a str,
    pub vrf_vk: &'a str,
}

pub const KEYS: Keys<'static> = Keys {
    acct_sk: "acct_sk",
    acct_vk: "acct_vk",
    acct_xsk: "acct_xsk",
    acct_xvk: "acct_xvk",
    acct_shared_sk: "acct_shared_sk",
    acct_shared_vk: "acct_shared_vk",
    acct_shared_xsk: "acct_shared_xsk",
    acct_shared_xvk: "acct_shared_xvk",
    addr_sk: "addr_sk",
    addr_vk: "addr_vk",
    addr_xsk: "addr_xsk",
    addr_xvk: "addr_xvk",
    addr_shared_sk: "addr_shared_sk",
    addr_shared_vk: "addr_shared_vk",
    addr_shared_xsk: "addr_shared_xsk",
    addr_shared_xvk: "addr_shared_xvk",
    kes_sk: "kes_sk",
    kes_vk: "kes_vk",
    policy_sk: "policy_sk",
    policy_vk: "policy_vk",
    pool_sk: "pool_sk",
    pool_vk: "pool_vk",
    root_sk: "root_sk",
    root_vk: "root_vk",
    root_xsk: "root_xsk",
    root_xvk: "root_xvk",
    root_shared_sk: "root_shared_sk",
    root_shared_vk: "root_shared_vk",
    root_shared_xsk: "root_shared_xsk",
    root_shared_xvk: "root_shared_xvk",
    stake_sk: "stake_sk",
    stake_vk: "stake_vk",
    stake_xsk: "stake_xsk",
    stake_xvk: "stake_xvk",
    stake_shared_sk: "stake_shared_sk",
    stake_shared_vk: "stake_shared_vk",
    stake_shared_xsk: "stake_shared_xsk",
    stake_shared_xvk: "stake_shared_xvk",
    vrf_sk: "vrf_sk",
    vrf_vk: "vrf_vk",
};

pub struct Hashes<'a> {
    pub asset: &'a str,
    pub pool: &'a str,
    pub script: &'a str,
    pub addr_vkh: &'a str,
    pub addr_shared_vkh: &'a str,
    pub policy_vkh: &'a str,
    pub stake_vkh: &'a str,
    pub stake_shared_vkh: &'a str,
    pub vrf_vkh: &'a str,
}

pub const HASHES: Hashes<'static> = Hashes {
    asset: "asset",
    pool: "pool",
    script: "script",
    addr_vkh: "addr_vkh",
    addr_shared_vkh: "addr_shared_vkh",
    policy_vkh: "policy_vkh",
    stake_vkh: "stake_vkh",
    stake_shared_vkh: "stake_shared_vkh",
    vrf_vkh: "vrf_vkh",
};

pub struct Miscellaneous<'a> {
    pub addr: &'a str,
    pub addr_test: &'a str,
    pub stake: &'a str,
    pub stake_test: &'a str,
}

pub const MISCELLANEOUS: Miscellaneous<'static> = Miscellaneous {
    addr: "addr",
    addr_test: "addr_test",
    stake: "stake",
    stake_test: "stake_test",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_prefix_is_properly_set() {
        assert_eq!(HASHES.asset, "asset");
    }

    #[test]
    fn keys_prefix_is_properly_set() {
        assert_eq!(KEYS.acct_shared_sk, "acct_shared_sk");
    }

    #[test]
    fn asset_prefix_is_properly_set() {
        assert_eq!(MISCELLANEOUS.addr, "addr");
    }
}
