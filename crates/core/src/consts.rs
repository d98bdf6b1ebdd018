// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! String constants shared by the data model and the migrator.

/// Entity-type tags accepted by `Migrator::migrate`.
pub mod tag {
    pub const ACCOUNTS: &str = "*accounts";
    pub const ACTIONS: &str = "*actions";
    pub const ACTION_TRIGGERS: &str = "*action_triggers";
    pub const ACTION_PLANS: &str = "*action_plans";
    pub const ACTION_PROFILES: &str = "*action_profiles";
    pub const ALIASES: &str = "*aliases";
    pub const ATTRIBUTES: &str = "*attributes";
    pub const CDR_STATS: &str = "*cdr_stats";
    pub const CHARGERS: &str = "*chargers";
    pub const DESTINATIONS: &str = "*destinations";
    pub const DISPATCHERS: &str = "*dispatchers";
    pub const FILTERS: &str = "*filters";
    pub const LOAD_IDS: &str = "*load_ids";
    pub const RATE_PROFILES: &str = "*rate_profiles";
    pub const RATING_PLANS: &str = "*rating_plans";
    pub const RATING_PROFILES: &str = "*rating_profiles";
    pub const RESOURCES: &str = "*resources";
    pub const REVERSE_DESTINATIONS: &str = "*reverse_destinations";
    pub const ROUTES: &str = "*routes";
    pub const SUPPLIERS: &str = "*suppliers";
    pub const SHARED_GROUPS: &str = "*shared_groups";
    pub const STATS: &str = "*stats";
    pub const THRESHOLDS: &str = "*thresholds";
    pub const TIMINGS: &str = "*timings";
    pub const USERS: &str = "*users";
    pub const SET_VERSIONS: &str = "*set_versions";
}

/// Names under which each entity type's schema version is stored.
pub mod version_key {
    pub const ACCOUNTS: &str = "Accounts";
    pub const ACTIONS: &str = "Actions";
    pub const ACTION_TRIGGERS: &str = "ActionTriggers";
    pub const ACTION_PLANS: &str = "ActionPlans";
    pub const ACTION_PROFILES: &str = "ActionProfiles";
    pub const ALIAS: &str = "Alias";
    pub const ATTRIBUTES: &str = "Attributes";
    pub const CDR_STATS: &str = "CdrStats";
    pub const CHARGERS: &str = "Chargers";
    pub const DESTINATIONS: &str = "Destinations";
    pub const DISPATCHERS: &str = "Dispatchers";
    pub const FILTERS: &str = "RQF";
    pub const LOAD_IDS: &str = "LoadIDs";
    pub const RATE_PROFILES: &str = "RateProfiles";
    pub const RATING_PLAN: &str = "RatingPlan";
    pub const RATING_PROFILE: &str = "RatingProfile";
    pub const RESOURCE: &str = "Resource";
    pub const REVERSE_DESTINATIONS: &str = "ReverseDestinations";
    pub const ROUTES: &str = "Routes";
    pub const SHARED_GROUPS: &str = "SharedGroups";
    pub const STATS: &str = "StatS";
    pub const THRESHOLDS: &str = "Thresholds";
    pub const TIMING: &str = "Timing";
    pub const USER: &str = "User";
}

/// Key prefixes of the flat key space.
pub mod prefix {
    pub const ACCOUNT: &str = "acc_";
    pub const ACCOUNT_ACTION_PLANS: &str = "aap_";
    pub const ACTION: &str = "act_";
    pub const ACTION_PLAN: &str = "apl_";
    pub const ACTION_PROFILE: &str = "acp_";
    pub const ACTION_TRIGGER: &str = "atr_";
    pub const ALIAS: &str = "als_";
    pub const ATTRIBUTE_PROFILE: &str = "alp_";
    pub const CDR_STATS: &str = "cst_";
    pub const CHARGER_PROFILE: &str = "cpp_";
    pub const DESTINATION: &str = "dst_";
    pub const DISPATCHER_HOST: &str = "dph_";
    pub const DISPATCHER_PROFILE: &str = "dpp_";
    pub const FILTER: &str = "ftr_";
    pub const FILTER_INDEX: &str = "fti_";
    pub const LOAD_IDS: &str = "lid_";
    pub const RATE_PROFILE: &str = "rtp_";
    pub const RATING_PLAN: &str = "rpl_";
    pub const RATING_PROFILE: &str = "rpf_";
    pub const RESOURCE: &str = "res_";
    pub const RESOURCE_PROFILE: &str = "rsp_";
    pub const REVERSE_ALIAS: &str = "rls_";
    pub const REVERSE_DESTINATION: &str = "rds_";
    pub const ROUTE_PROFILE: &str = "rpp_";
    pub const SHARED_GROUP: &str = "shg_";
    pub const STAT_QUEUE: &str = "stq_";
    pub const STAT_QUEUE_PROFILE: &str = "sqp_";
    pub const SUPPLIER_PROFILE: &str = "spp_";
    pub const THRESHOLD: &str = "thd_";
    pub const THRESHOLD_PROFILE: &str = "thp_";
    pub const TIMING: &str = "tmg_";
    pub const USER: &str = "usr_";

    /// Key holding the stored version map.
    pub const VERSIONS: &str = "versions";
}

/// `*`-prefixed markers used across filters, attributes and balances.
pub mod meta {
    pub const ACT: &str = "*act";
    pub const ANY: &str = "*any";
    pub const ASAP: &str = "*asap";
    pub const CGREP: &str = "*cgrep";
    pub const CGREQ: &str = "*cgreq";
    pub const DESTINATIONS: &str = "*destinations";
    pub const EXISTS: &str = "*exists";
    pub const GTE: &str = "*gte";
    pub const LT: &str = "*lt";
    pub const MONETARY: &str = "*monetary";
    pub const NONE: &str = "*none";
    pub const NOT_RESOURCES: &str = "*notresources";
    pub const NOT_RSR: &str = "*notrsr";
    pub const NOT_STATS: &str = "*notstats";
    pub const OUT: &str = "*out";
    pub const PREFIX: &str = "*prefix";
    pub const REP: &str = "*rep";
    pub const REQ: &str = "*req";
    pub const RESOURCES: &str = "*resources";
    pub const RSR: &str = "*rsr";
    pub const STATS: &str = "*stats";
    pub const STRING: &str = "*string";
    pub const VARIABLE: &str = "*variable";
    pub const VARS: &str = "*vars";
}

pub const META_PREFIX: &str = "*";
pub const DYNAMIC_DATA_PREFIX: &str = "~";
pub const CONCATENATED_KEY_SEP: &str = ":";
pub const IN_FIELD_SEP: &str = ";";
pub const NESTING_SEP: &str = ".";
pub const PIPE_SEP: &str = "|";
pub const AND_SEP: &str = "&";
pub const FILTER_VAL_START: &str = "(";
pub const FILTER_VAL_END: &str = ")";
