//! The fixed unit catalog
//!
//! Hand-authored and immutable. Every generation run enumerates
//! `UNITS × Affiliation::ALL × Confidence::ALL` in this order.

use crate::{UnitCategory, UnitDefinition, WeightClass};

const fn unit(
    id: &'static str,
    label: &'static str,
    friendly_name: &'static str,
    hostile_name: &'static str,
    weight: WeightClass,
    category: UnitCategory,
    sidc_template: &'static str,
) -> UnitDefinition {
    UnitDefinition {
        id,
        label,
        friendly_name,
        hostile_name,
        weight,
        category,
        sidc_template,
    }
}

use UnitCategory::*;
use WeightClass::*;

/// All unit definitions, in generation order
#[rustfmt::skip]
pub const UNITS: &[UnitDefinition] = &[
    // Infantry
    unit("inf_rifle", "ライフル歩兵", "friendly infantry", "enemy infantry", Light, Infantry,
        "130X10000012110000000000000000"),
    unit("inf_mech", "機械化歩兵", "friendly mechanized infantry", "enemy mechanized infantry", Medium, Infantry,
        "130X10000012110200000000000000"),
    unit("inf_engineer", "工兵", "friendly engineer", "enemy engineer", Light, Infantry,
        "130X10000014070000000000000000"),
    unit("inf_recon", "偵察", "friendly reconnaissance", "enemy reconnaissance", Light, Infantry,
        "130X10000012130000000000000000"),
    // Armor
    unit("armor_tank", "戦車", "friendly armor", "enemy armor", Heavy, Armor,
        "130X10000012050000000000000000"),
    unit("armor_ifv", "IFV（歩兵戦闘車）", "friendly mechanized infantry", "enemy mechanized infantry", Medium, Armor,
        "130X10000012110200000000000000"),
    unit("armor_apc", "APC（装甲兵員輸送車）", "friendly motorized infantry", "enemy motorized infantry", Medium, Armor,
        "130X10000012110400000000000000"),
    // Fire support
    unit("fs_mortar", "迫撃砲", "friendly mortar", "enemy mortar", Light, FireSupport,
        "130X10000013080000000000000000"),
    unit("fs_artillery", "砲兵", "friendly artillery", "enemy artillery", Heavy, FireSupport,
        "130X10000013030000000000000000"),
    unit("fs_atgm", "対戦車ミサイル", "friendly antitank", "enemy antitank", Light, FireSupport,
        "130X10000012040000000000000000"),
    // Reconnaissance
    unit("recon_uav", "UAV（無人偵察機）", "friendly unmanned aircraft", "enemy unmanned aircraft", Light, Recon,
        "130X01000011030000000000000000"),
    // Support
    unit("sup_logistics", "兵站/補給", "friendly combat service support", "enemy combat service support", Light, Support,
        "130X10000016340000000000000000"),
    unit("sup_medevac", "衛生/後送", "friendly medical", "enemy medical", Light, Support,
        "130X10000016130000000000000000"),
    // Command
    unit("cmd_hq", "中隊本部（HQ）", "friendly infantry headquarters", "enemy infantry headquarters", Light, Command,
        "130X10011312110000000000000000"),
];

/// Look up a unit by id
pub fn find(id: &str) -> Option<&'static UnitDefinition> {
    UNITS.iter().find(|u| u.id == id)
}

/// Ids of every unit, in catalog order
pub fn ids() -> impl Iterator<Item = &'static str> {
    UNITS.iter().map(|u| u.id)
}
