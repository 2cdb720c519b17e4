use std::collections::HashMap;
use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog::{fitting_types, find_material, materials, PipeMaterialData};
use crate::config::Config;
use crate::hydraulics::FluidSpec;
use crate::i18n::{keys, Translator};
use crate::session::{RunDraft, Session};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ProjectInputs,
    AddRun,
    RemoveRun,
    Results,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_PROJECT_INPUTS));
    println!("{}", tr.t(keys::MAIN_MENU_ADD_RUN));
    println!("{}", tr.t(keys::MAIN_MENU_REMOVE_RUN));
    println!("{}", tr.t(keys::MAIN_MENU_RESULTS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ProjectInputs),
            "2" => return Ok(MenuChoice::AddRun),
            "3" => return Ok(MenuChoice::RemoveRun),
            "4" => return Ok(MenuChoice::Results),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 유량·유체 입력 메뉴를 처리한다.
pub fn handle_project_inputs(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROJECT_HEADING));
    println!(
        "{} {:.2} GPM",
        tr.t(keys::PROJECT_CURRENT_FLOW),
        session.flow_gpm()
    );
    println!(
        "{} {}",
        tr.t(keys::PROJECT_CURRENT_FLUID),
        fluid_label(tr, &session.fluid())
    );

    let flow = read_f64(tr, tr.t(keys::PROMPT_FLOW_GPM))?;
    session.set_flow_gpm(flow);

    println!("{}", tr.t(keys::FLUID_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_FLUID_SELECT))?;
    let fluid = if sel.trim() == "2" {
        let percent = read_f64(tr, tr.t(keys::PROMPT_GLYCOL_PERCENT))?;
        FluidSpec::Glycol { percent }
    } else {
        FluidSpec::Water
    };
    session.set_fluid(fluid);
    Ok(())
}

/// 배관 런 추가 메뉴를 처리한다.
pub fn handle_add_run(
    tr: &Translator,
    cfg: &Config,
    session: &mut Session,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ADD_RUN_HEADING));

    let material = select_material(tr, find_material(&cfg.default_material))?;

    println!("{}", tr.t(keys::ADD_RUN_SIZES));
    let size_list: Vec<String> = material
        .sizes
        .iter()
        .map(|s| s.nominal_in.to_string())
        .collect();
    println!("  {}", size_list.join("  "));
    let nominal_size_in = read_f64(tr, tr.t(keys::PROMPT_NOMINAL_SIZE))?;

    let length_ft = read_f64(tr, tr.t(keys::PROMPT_LENGTH_FT))?;

    println!("{}", tr.t(keys::ADD_RUN_FITTINGS));
    let mut fitting_counts: HashMap<&'static str, u32> = HashMap::new();
    for fitting in fitting_types() {
        let prompt = format!("  {}{}", fitting.name, tr.t(keys::PROMPT_FITTING_COUNT_SUFFIX));
        let count = read_count(tr, &prompt)?;
        if count > 0 {
            fitting_counts.insert(fitting.name, count);
        }
    }

    let id = session.add_run(RunDraft {
        material_name: material.name.to_string(),
        nominal_size_in,
        length_ft,
        fitting_counts,
    })?;
    println!("{} {id}", tr.t(keys::ADD_RUN_SAVED));
    Ok(())
}

/// 배관 런 삭제 메뉴를 처리한다.
pub fn handle_remove_run(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::REMOVE_RUN_HEADING));
    if session.runs().is_empty() {
        println!("{}", tr.t(keys::RESULTS_NO_RUNS));
        return Ok(());
    }
    for (i, run) in session.runs().iter().enumerate() {
        println!(
            "  {}) {} {}\" {:.1} ft",
            i + 1,
            run.material.name,
            run.nominal_size_in,
            run.length_ft
        );
    }
    let sel = read_line(tr.t(keys::PROMPT_RUN_NUMBER))?;
    let id = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| session.runs().get(i))
        .map(|run| run.id.clone());
    match id {
        Some(id) if session.remove_run(&id) => {
            println!("{} {id}", tr.t(keys::REMOVE_RUN_DONE));
        }
        _ => println!("{}", tr.t(keys::REMOVE_RUN_NOT_FOUND)),
    }
    Ok(())
}

/// 결과 요약 메뉴를 처리한다. 런별 행과 합계 행을 표로 출력한다.
pub fn handle_results(tr: &Translator, session: &Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RESULTS_HEADING));
    if session.runs().is_empty() {
        println!("{}", tr.t(keys::RESULTS_NO_RUNS));
        return Ok(());
    }

    println!("{}", tr.t(keys::RESULTS_TABLE_HEADER));
    let results = session.results();
    for (i, (run, result)) in session.runs().iter().zip(results.iter()).enumerate() {
        // 세션 검증을 거친 런은 항상 Some이지만, 혹시 모를 불완전 런은 행 없이 건너뛴다.
        if let Some(r) = result {
            println!(
                "{:<5} {:<13} {:>4} {:>9.1} {:>12.2} {:>14.2} {:>13.2} {:>9.2}",
                i + 1,
                run.material.name,
                run.nominal_size_in,
                r.length_ft,
                r.velocity_ft_per_s,
                r.head_loss_ft,
                r.pressure_drop_psi,
                r.total_k
            );
        }
    }

    let totals = session.totals();
    println!(
        "{:<5} {:<13} {:>4} {:>9.1} {:>12.2} {:>14.2} {:>13.2} {:>9.2}",
        tr.t(keys::RESULTS_TOTAL_LABEL),
        "",
        "",
        totals.length_ft,
        totals.velocity_ft_per_s,
        totals.head_loss_ft,
        totals.pressure_drop_psi,
        totals.total_k
    );

    println!();
    println!("{}", tr.t(keys::RESULTS_NOTES_HEADING));
    println!("{}", tr.t(keys::RESULTS_NOTE_METHOD));
    println!("{}", tr.t(keys::RESULTS_NOTE_UNITS));
    println!("{}", tr.t(keys::RESULTS_NOTE_VERIFY));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.language = "ko".to_string(),
        "2" => cfg.language = "en".to_string(),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_MATERIAL),
        cfg.default_material
    );
    print_materials(tr);
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_MATERIAL))?;
    match sel.trim() {
        "" => {}
        other => match other
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| materials().get(i))
        {
            Some(material) => cfg.default_material = material.name.to_string(),
            None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        },
    }

    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn fluid_label(tr: &Translator, fluid: &FluidSpec) -> String {
    match fluid {
        FluidSpec::Water => tr.t(keys::FLUID_NAME_WATER).to_string(),
        FluidSpec::Glycol { percent } => {
            format!("{} {percent}%", tr.t(keys::FLUID_NAME_GLYCOL))
        }
    }
}

fn print_materials(tr: &Translator) {
    println!("{}", tr.t(keys::ADD_RUN_MATERIALS));
    for (i, material) in materials().iter().enumerate() {
        println!(
            "  {}) {} (C={})",
            i + 1,
            material.name,
            material.hazen_williams_c
        );
    }
}

fn select_material(
    tr: &Translator,
    default: Option<&'static PipeMaterialData>,
) -> Result<&'static PipeMaterialData, AppError> {
    print_materials(tr);
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MATERIAL))?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            if let Some(material) = default {
                return Ok(material);
            }
        }
        if let Some(material) = trimmed
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| materials().get(i))
        {
            return Ok(material);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 개수 입력을 읽는다. 빈 입력은 0으로 취급한다.
fn read_count(tr: &Translator, prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        match trimmed.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
