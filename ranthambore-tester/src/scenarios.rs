//! Scenario catalog: worked booking examples plus seeded property sweeps.
use anyhow::{Context, Result, bail, ensure};
use chrono::{Days, NaiveDate};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use ranthambore_booking::submission::{complete_round_trip, submit_after_delay};
use ranthambore_booking::validate::{FieldTouch, validate};
use ranthambore_booking::{
    BookingDesk, BookingFlow, BookingRequest, CancellationToken, ChambalDraft, ChambalFlow,
    ChambalPackage, FieldRule, FieldSpec, FormValues, GatewayError, HotelDraft, HotelFlow,
    HotelQuery, MemoryRelay, PackageDraft, PackageFlow, PackageTier, PassengerError,
    PassengerField, PassengerList, PromoCode, RoomTier, SafariBookingDraft, SafariFlow,
    SafariRelay, SafariSelection, SimulatedGateway, SubmissionFlow, submit_draft,
};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Draws per iteration in the sweep scenarios.
const SWEEP: usize = 200;

const SWEEP_START: NaiveDate = match NaiveDate::from_ymd_opt(2026, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Fixed clock for submissions so confirmation ids depend on the seed alone.
const SUBMITTED_AT_MS: i64 = 1_766_000_000_000;

pub type TimedFuture = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

#[derive(Clone, Copy)]
pub enum ScenarioCheck {
    /// Synchronous check driven by a per-iteration rng.
    Pure(fn(&mut ChaCha8Rng) -> Result<()>),
    /// Check that needs the tokio clock; receives the iteration seed.
    Timed(fn(u64) -> TimedFuture),
}

#[derive(Clone, Copy)]
pub struct BookingScenario {
    pub key: &'static str,
    pub description: &'static str,
    pub check: ScenarioCheck,
}

const CATALOG: &[BookingScenario] = &[
    BookingScenario {
        key: "chambal-quote",
        description: "Standard Chambal package for two Indian visitors totals ₹3,399",
        check: ScenarioCheck::Pure(chambal_quote),
    },
    BookingScenario {
        key: "hotel-stay-quote",
        description: "Deluxe room for three nights totals ₹33,600 with tax",
        check: ScenarioCheck::Pure(hotel_stay_quote),
    },
    BookingScenario {
        key: "promo-discount",
        description: "SAVE10 takes ₹3,000 off the three-night stay",
        check: ScenarioCheck::Pure(promo_discount),
    },
    BookingScenario {
        key: "inverted-stay",
        description: "Same-day or reversed dates quote ₹0",
        check: ScenarioCheck::Pure(inverted_stay),
    },
    BookingScenario {
        key: "flag-all-errors",
        description: "A rejected submit flags every invalid field at once",
        check: ScenarioCheck::Pure(flag_all_errors),
    },
    BookingScenario {
        key: "passenger-renumbering",
        description: "Removing passenger 3 of 6 renumbers the rest contiguously",
        check: ScenarioCheck::Pure(passenger_renumbering),
    },
    BookingScenario {
        key: "quote-properties",
        description: "Random drafts never quote below zero and quote the same twice",
        check: ScenarioCheck::Pure(quote_properties),
    },
    BookingScenario {
        key: "validator-completeness",
        description: "Validation flags exactly the failing fields",
        check: ScenarioCheck::Pure(validator_completeness),
    },
    BookingScenario {
        key: "passenger-churn",
        description: "Random add/remove keeps the list capped and numbered",
        check: ScenarioCheck::Pure(passenger_churn),
    },
    BookingScenario {
        key: "submission-round-trip",
        description: "Valid Chambal drafts confirm and mirror to the local store",
        check: ScenarioCheck::Pure(submission_round_trip),
    },
    BookingScenario {
        key: "safari-relay",
        description: "Safari selection survives the relay to the booking page",
        check: ScenarioCheck::Pure(safari_relay),
    },
    BookingScenario {
        key: "cancelled-submission",
        description: "Tearing the page down mid-delay never confirms",
        check: ScenarioCheck::Timed(cancelled_submission),
    },
];

/// The worked examples every release must reproduce.
pub const SMOKE: &[&str] = &[
    "chambal-quote",
    "hotel-stay-quote",
    "promo-discount",
    "inverted-stay",
    "flag-all-errors",
    "passenger-renumbering",
];

pub fn get_scenario(key: &str) -> Option<BookingScenario> {
    CATALOG.iter().copied().find(|scenario| scenario.key == key)
}

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG
        .iter()
        .map(|scenario| (scenario.key, scenario.description))
}

pub fn all_keys() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|scenario| scenario.key)
}

fn pick<'a, T>(rng: &mut ChaCha8Rng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn random_date(rng: &mut ChaCha8Rng) -> String {
    SWEEP_START
        .checked_add_days(Days::new(rng.gen_range(0..365)))
        .unwrap_or(SWEEP_START)
        .format("%Y-%m-%d")
        .to_string()
}

fn promo_input(rng: &mut ChaCha8Rng) -> String {
    match rng.gen_range(0..3) {
        0 => String::new(),
        1 => pick(rng, &PromoCode::ALL).code().to_string(),
        _ => "BOGUS".to_string(),
    }
}

fn deluxe_stay(check_in: &str, check_out: &str, promo: &str) -> HotelDraft {
    HotelDraft {
        check_in: check_in.into(),
        check_out: check_out.into(),
        promo_code: promo.into(),
        ..HotelDraft::with_room(Some("deluxe"))
    }
}

fn complete_chambal_draft(rng: &mut ChaCha8Rng) -> ChambalDraft {
    ChambalDraft {
        name: "Asha Rao".into(),
        mobile: "9876543210".into(),
        email: "asha@example.com".into(),
        id_proof_type: "aadhar".into(),
        id_proof: "123412341234".into(),
        state: "rajasthan".into(),
        indian_persons: rng.gen_range(1..=6).to_string(),
        foreign_persons: rng.gen_range(0..=4).to_string(),
        booking_date: random_date(rng),
        safari_timing: "7:00 AM".into(),
        address: "Near Chambal Ghat, Dholpur, Rajasthan".into(),
        terms: true,
        package: *pick(rng, ChambalPackage::ALL),
    }
}

fn chambal_quote(_rng: &mut ChaCha8Rng) -> Result<()> {
    let draft = ChambalDraft {
        indian_persons: "2".into(),
        foreign_persons: "0".into(),
        ..ChambalDraft::for_package(Some("standard"))
    };
    let total = ChambalFlow::new().quote(&draft).formatted_total();
    ensure!(total == "₹3,399", "expected ₹3,399, quoted {total}");
    Ok(())
}

fn hotel_stay_quote(_rng: &mut ChaCha8Rng) -> Result<()> {
    let flow = HotelFlow::from_query(&HotelQuery::default());
    let quote = flow.quote(&deluxe_stay("2025-09-01", "2025-09-04", ""));
    ensure!(quote.pre_tax() == 30_000, "pre-tax {} != 30000", quote.pre_tax());
    ensure!(
        quote.formatted_total() == "₹33,600",
        "expected ₹33,600, quoted {}",
        quote.formatted_total()
    );
    Ok(())
}

fn promo_discount(_rng: &mut ChaCha8Rng) -> Result<()> {
    let flow = HotelFlow::from_query(&HotelQuery::default());
    let quote = flow.quote(&deluxe_stay("2025-09-01", "2025-09-04", "SAVE10"));
    ensure!(quote.savings() == 3_000, "saved {} instead of 3000", quote.savings());
    ensure!(
        quote.formatted_total() == "₹30,600",
        "expected ₹30,600, quoted {}",
        quote.formatted_total()
    );
    Ok(())
}

fn inverted_stay(_rng: &mut ChaCha8Rng) -> Result<()> {
    let flow = HotelFlow::from_query(&HotelQuery::default());
    for (check_in, check_out) in [("2025-09-04", "2025-09-04"), ("2025-09-04", "2025-09-01")] {
        let draft = deluxe_stay(check_in, check_out, "SAVE10");
        ensure!(draft.stay().is_none(), "{check_in}..{check_out} parsed as a stay");
        let total = flow.quote(&draft).formatted_total();
        ensure!(total == "₹0", "{check_in}..{check_out} quoted {total}");
    }
    Ok(())
}

fn flag_all_errors(_rng: &mut ChaCha8Rng) -> Result<()> {
    let specs = [
        FieldSpec::new("name", "Name", "Please enter your full name")
            .rule(FieldRule::Required)
            .rule(FieldRule::MinLength(3)),
        FieldSpec::new("email", "Email", "Please enter a valid email address")
            .rule(FieldRule::Required)
            .rule(FieldRule::Email),
        FieldSpec::new("mobile", "Mobile", "Please enter a valid 10-digit mobile number")
            .rule(FieldRule::Required),
    ];
    let values = FormValues::new()
        .with_text("name", "")
        .with_text("email", "asha@example")
        .with_text("mobile", "9876543210");
    let report = validate(&specs, &values);
    let mut touch = FieldTouch::new();
    touch.apply(&specs, &report);
    ensure!(touch.shows_error("name"), "name not flagged");
    ensure!(touch.shows_error("email"), "email not flagged");
    ensure!(!touch.shows_error("mobile"), "mobile flagged");

    let mut state = SubmissionFlow::new();
    let draft = ChambalDraft {
        email: "not-an-email".into(),
        ..ChambalDraft::for_package(None)
    };
    let outcome = submit_draft(&ChambalFlow::new(), &mut state, &draft, SUBMITTED_AT_MS)?;
    ensure!(outcome.is_none(), "incomplete draft was accepted");
    let kept = state.report().context("rejected submit kept no report")?;
    ensure!(kept.error_for("name").is_some() && kept.error_for("email").is_some());
    ensure!(!state.is_busy(), "rejected submit left the flow busy");
    Ok(())
}

fn passenger_renumbering(_rng: &mut ChaCha8Rng) -> Result<()> {
    let mut list = PassengerList::new();
    while list.can_add() {
        list.add()?;
    }
    ensure!(list.len() == 6, "cap should be six, got {}", list.len());
    for index in 0..6 {
        list.set_field(index, PassengerField::Name, format!("P{}", index + 1));
    }
    list.remove(2)?;
    let rows: Vec<(usize, String)> = list
        .rows()
        .map(|(number, row)| (number, row.name.clone()))
        .collect();
    let expected: Vec<(usize, String)> = [(1, "P1"), (2, "P2"), (3, "P4"), (4, "P5"), (5, "P6")]
        .into_iter()
        .map(|(number, name)| (number, name.to_string()))
        .collect();
    ensure!(rows == expected, "rows after removal: {rows:?}");
    ensure!(list.can_add(), "add stays disabled below the cap");
    Ok(())
}

fn quote_properties(rng: &mut ChaCha8Rng) -> Result<()> {
    let chambal = ChambalFlow::new();
    let hotel = HotelFlow::from_query(&HotelQuery::for_hotel("grand-plaza-hotel"));
    let package = PackageFlow::new();
    for _ in 0..SWEEP {
        let chambal_draft = ChambalDraft {
            package: *pick(rng, ChambalPackage::ALL),
            indian_persons: rng.gen_range(-2..10).to_string(),
            foreign_persons: rng.gen_range(-2..10).to_string(),
            ..ChambalDraft::default()
        };
        let quote = chambal.quote(&chambal_draft);
        ensure!(quote.total >= 0, "negative Chambal quote {quote:?}");
        ensure!(quote == chambal.quote(&chambal_draft), "Chambal quote drifted");

        let hotel_draft = HotelDraft {
            room: *pick(rng, RoomTier::ALL),
            check_in: random_date(rng),
            check_out: random_date(rng),
            guests: rng.gen_range(0..8).to_string(),
            promo_code: promo_input(rng),
            ..HotelDraft::default()
        };
        let quote = hotel.quote(&hotel_draft);
        ensure!(quote.total >= 0, "negative hotel quote {quote:?}");
        ensure!(quote == hotel.quote(&hotel_draft), "hotel quote drifted");

        let package_draft = PackageDraft {
            tier: *pick(rng, PackageTier::ALL),
            travellers: rng.gen_range(0..8).to_string(),
            promo_code: promo_input(rng),
            ..PackageDraft::default()
        };
        let quote = package.quote(&package_draft);
        ensure!(quote.total >= 0, "negative package quote {quote:?}");
    }

    let tier = *pick(rng, ChambalPackage::ALL);
    let mut last = 0;
    for indian in 1..=6 {
        let draft = ChambalDraft {
            package: tier,
            indian_persons: indian.to_string(),
            ..ChambalDraft::default()
        };
        let total = chambal.quote(&draft).total;
        ensure!(total >= last, "{tier} got cheaper at {indian} visitors");
        last = total;
    }
    Ok(())
}

fn validator_completeness(rng: &mut ChaCha8Rng) -> Result<()> {
    let specs: Vec<FieldSpec> = (0..8)
        .map(|i| FieldSpec::new(format!("field-{i}"), "Field", "Required").rule(FieldRule::Required))
        .collect();
    for _ in 0..SWEEP {
        let mut values = FormValues::new();
        let mut expected = Vec::new();
        for spec in &specs {
            if rng.gen_bool(0.4) {
                values.set_text(&spec.id, "  ");
                expected.push(spec.id.clone());
            } else {
                values.set_text(&spec.id, "filled");
            }
        }
        let report = validate(&specs, &values);
        let flagged: Vec<String> = report.invalid_fields().map(ToString::to_string).collect();
        ensure!(flagged == expected, "flagged {flagged:?}, expected {expected:?}");
        ensure!(report.checked == specs.len(), "checked {} fields", report.checked);
    }
    Ok(())
}

fn passenger_churn(rng: &mut ChaCha8Rng) -> Result<()> {
    let mut list = PassengerList::new();
    for _ in 0..SWEEP {
        if rng.gen_bool(0.55) {
            match list.add() {
                Ok(number) => {
                    ensure!(number == list.len(), "new row numbered {number}");
                }
                Err(PassengerError::CapReached) => {
                    ensure!(list.len() == 6, "cap hit at {}", list.len());
                }
                Err(err) => bail!("unexpected add failure: {err}"),
            }
        } else if !list.is_empty() {
            let index = rng.gen_range(0..list.len());
            list.remove(index)?;
        }
        ensure!(list.can_add() == (list.len() < 6), "add toggle out of sync");
        let numbers: Vec<usize> = list.rows().map(|(number, _)| number).collect();
        let expected: Vec<usize> = (1..=list.len()).collect();
        ensure!(numbers == expected, "numbers {numbers:?}");
    }
    Ok(())
}

fn submission_round_trip(rng: &mut ChaCha8Rng) -> Result<()> {
    let flow = ChambalFlow::new();
    let draft = complete_chambal_draft(rng);
    let mut state = SubmissionFlow::new();
    let request = submit_draft(&flow, &mut state, &draft, SUBMITTED_AT_MS)?
        .context("complete draft was rejected")?;
    ensure!(state.is_busy(), "accepted submit should be processing");

    let seed = rng.r#gen::<u64>();
    let mut desk = BookingDesk::new(SimulatedGateway::seeded(seed), MemoryRelay::new());
    let token = CancellationToken::new();
    state.resolve(complete_round_trip(&mut desk, request.clone(), &token))?;
    let record = state.confirmation().context("no confirmation shown")?.clone();

    ensure!(record.booking_id.starts_with("CHB"), "id {}", record.booking_id);
    ensure!(
        record.total() == flow.quote(&draft).formatted_total(),
        "confirmed {} but quoted {}",
        record.total(),
        flow.quote(&draft).formatted_total()
    );
    ensure!(
        desk.last_confirmation()?.as_ref() == Some(&record),
        "confirmation not mirrored"
    );

    let mut replay = SimulatedGateway::seeded(seed);
    let again = complete_round_trip(&mut replay, request, &token)?;
    ensure!(again.booking_id == record.booking_id, "same seed issued a new id");
    Ok(())
}

fn safari_relay(rng: &mut ChaCha8Rng) -> Result<()> {
    let zone = rng.gen_range(1..=10).to_string();
    let selection = SafariSelection {
        name: "  Asha Rao ".into(),
        email: " Asha@Example.com".into(),
        mobile: "98765 43210".into(),
        timing: "morning".into(),
        safari: (*pick(rng, &["jeep", "canter"])).into(),
        zone: zone.clone(),
        booking_date: random_date(rng),
    };
    let relay = ranthambore_booking::flows::safari::prepare_relay(&selection)
        .map_err(|report| anyhow::anyhow!("selection rejected: {:?}", report.first_message()))?;

    let storage = MemoryRelay::new();
    relay.store(&storage)?;
    let loaded = SafariRelay::load(&storage)?;
    ensure!(loaded == relay, "relay changed in storage");
    ensure!(loaded.email == "asha@example.com", "email kept as {}", loaded.email);
    ensure!(loaded.mobile == "9876543210", "mobile kept as {}", loaded.mobile);
    ensure!(loaded.zone == zone, "zone {} != {zone}", loaded.zone);

    let draft = SafariBookingDraft::from_relay(loaded);
    ensure!(draft.passengers.len() == 1, "booking page starts with one passenger");
    ensure!(SafariFlow::new().quote(&draft).total > 0, "safari quote is empty");

    SafariRelay::clear(&storage)?;
    ensure!(SafariRelay::load(&storage)?.is_blank(), "relay survived clear");
    Ok(())
}

fn package_request(seed: u64) -> BookingRequest {
    let draft = PackageDraft {
        tier: PackageTier::ALL[usize::try_from(seed).unwrap_or(0) % PackageTier::ALL.len()],
        travellers: "2".into(),
        ..PackageDraft::default()
    };
    PackageFlow::new().request(&draft, SUBMITTED_AT_MS)
}

fn cancelled_submission(seed: u64) -> TimedFuture {
    Box::pin(async move {
        let token = CancellationToken::new();
        let page = token.clone().drop_guard();
        let task = {
            let token = token.clone();
            tokio::spawn(async move {
                let mut gateway = SimulatedGateway::seeded(seed);
                submit_after_delay(
                    &mut gateway,
                    package_request(seed),
                    Duration::from_millis(20),
                    &token,
                )
                .await
            })
        };
        drop(page);
        let outcome = task.await.context("submission task panicked")?;
        ensure!(
            outcome == Err(GatewayError::Cancelled),
            "torn-down page settled with {outcome:?}"
        );

        let live = CancellationToken::new();
        let mut gateway = SimulatedGateway::seeded(seed);
        let record = tokio::time::timeout(
            Duration::from_secs(1),
            submit_after_delay(&mut gateway, package_request(seed), Duration::from_millis(5), &live),
        )
        .await
        .context("live submission never settled")??;
        ensure!(record.booking_id.starts_with("PKG"), "id {}", record.booking_id);
        Ok(())
    })
}
