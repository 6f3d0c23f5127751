use separator_sizing_toolbox::separator::sizing::{
    self, Orientation, SeparatorInput, SizingError, SLENDERNESS_MAX, SLENDERNESS_MIN,
};

fn base_input() -> SeparatorInput {
    SeparatorInput {
        orientation: Orientation::Vertical,
        pressure_psia: 1000.0,
        temperature_r: 600.0,
        gas_sg: 0.6,
        gas_flow_mmscfd: 10.0,
        z_factor: None,
        oil_sg: 0.86,
        water_sg: 1.05,
        oil_flow_bpd: 2000.0,
        water_flow_bpd: 1000.0,
        oil_viscosity_cp: 10.0,
        water_viscosity_cp: 1.0,
        oil_density_lb_ft3: 54.0,
        dm_liquid_um: 100.0,
        dm_oil_um: 200.0,
        dm_water_um: 500.0,
        retention_time_min: 5.0,
        slenderness: 3.0,
    }
}

#[test]
fn gas_only_vertical_scenario() {
    // p=1000 psia, T=600 °R, SG=0.6, Qg=10 MMscfd, ρo=54, dm=100 µm, 수직,
    // 액체 유량 0: 가스 처리용량만 직경을 지배하고 길이는 세장비 정책을 따른다
    let mut input = base_input();
    input.oil_flow_bpd = 0.0;
    input.water_flow_bpd = 0.0;
    let res = sizing::size(&input).expect("sizing");

    assert!(
        res.diameter_ft >= 3.0 && res.diameter_ft <= 10.0,
        "diameter={} ft",
        res.diameter_ft
    );
    assert_eq!(res.retention_diameter_ft, 0.0);
    assert_eq!(res.retention_length_ft, 0.0);
    assert!(res.gas_capacity_diameter_ft > 0.0);
    let ratio = res.length_ft / res.diameter_ft;
    assert!(
        (SLENDERNESS_MIN..=SLENDERNESS_MAX).contains(&ratio),
        "L/D={ratio}"
    );
}

#[test]
fn size_is_deterministic() {
    let input = base_input();
    let a = sizing::size(&input).expect("sizing");
    let b = sizing::size(&input).expect("sizing");
    assert_eq!(a.diameter_ft, b.diameter_ft);
    assert_eq!(a.length_ft, b.length_ft);
    assert_eq!(a.gas_density_lb_ft3, b.gas_density_lb_ft3);
    assert_eq!(
        a.gas_settling.velocity_ft_per_s,
        b.gas_settling.velocity_ft_per_s
    );
}

#[test]
fn retention_time_monotone() {
    // 체류시간을 늘리면 액체 체류 제약 길이는 줄어들지 않는다
    let mut last = 0.0;
    for rt in [2.0, 5.0, 10.0, 20.0] {
        let mut input = base_input();
        input.retention_time_min = rt;
        let res = sizing::size(&input).expect("sizing");
        assert!(
            res.retention_length_ft >= last,
            "rt={rt} length={} < {last}",
            res.retention_length_ft
        );
        last = res.retention_length_ft;
    }
}

#[test]
fn all_flows_zero_gives_zero_vessel() {
    let mut input = base_input();
    input.gas_flow_mmscfd = 0.0;
    input.oil_flow_bpd = 0.0;
    input.water_flow_bpd = 0.0;
    let res = sizing::size(&input).expect("sizing");
    assert_eq!(res.diameter_ft, 0.0);
    assert_eq!(res.length_ft, 0.0);
    assert!(!res.warnings.is_empty());
}

#[test]
fn invalid_pressure_rejected() {
    let mut input = base_input();
    input.pressure_psia = 0.0;
    let err = sizing::size(&input).expect_err("p=0 must fail");
    assert!(matches!(err, SizingError::InvalidInput(_)), "{err:?}");
}

#[test]
fn invalid_droplet_size_rejected() {
    let mut input = base_input();
    input.dm_water_um = -10.0;
    assert!(sizing::size(&input).is_err());
}

#[test]
fn negative_flow_rejected() {
    let mut input = base_input();
    input.water_flow_bpd = -1.0;
    assert!(sizing::size(&input).is_err());
}

#[test]
fn diameter_rounds_to_half_foot() {
    let res = sizing::size(&base_input()).expect("sizing");
    let doubled = res.diameter_ft * 2.0;
    assert!(
        (doubled - doubled.round()).abs() < 1e-9,
        "diameter={} not on 0.5 ft grid",
        res.diameter_ft
    );
    // 올림이므로 지배 제약보다 작아지지 않는다
    let governing = res
        .gas_capacity_diameter_ft
        .max(res.oil_settling_diameter_ft)
        .max(res.water_settling_diameter_ft)
        .max(res.retention_diameter_ft);
    assert!(res.diameter_ft >= governing);
}

#[test]
fn horizontal_orientation_sizes() {
    let mut input = base_input();
    input.orientation = Orientation::Horizontal;
    input.oil_flow_bpd = 5000.0;
    input.water_flow_bpd = 3000.0;
    let res = sizing::size(&input).expect("sizing");
    assert!(res.diameter_ft > 0.0);
    let ratio = res.length_ft / res.diameter_ft;
    assert!(
        (SLENDERNESS_MIN..=SLENDERNESS_MAX).contains(&ratio),
        "L/D={ratio}"
    );
}

#[test]
fn governing_constraint_is_max() {
    let res = sizing::size(&base_input()).expect("sizing");
    for d in [
        res.gas_capacity_diameter_ft,
        res.oil_settling_diameter_ft,
        res.water_settling_diameter_ft,
        res.retention_diameter_ft,
    ] {
        assert!(res.diameter_ft >= d, "selected {} < constraint {d}", res.diameter_ft);
    }
}

#[test]
fn zero_gas_flow_keeps_liquid_constraints() {
    let mut input = base_input();
    input.gas_flow_mmscfd = 0.0;
    let res = sizing::size(&input).expect("sizing");
    assert_eq!(res.gas_capacity_diameter_ft, 0.0);
    assert!(res.retention_diameter_ft > 0.0);
    assert!(res.diameter_ft > 0.0);
}
