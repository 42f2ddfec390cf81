use std::path::PathBuf;

use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use front_desk::booking::{
    BillingCalculator, BookingRequest, FrontDeskService, ReservationReceipt, RoomClass,
};
use front_desk::error::AppError;

use crate::infra::seed_rooms;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Room class to price (standard, deluxe, or suite)
    #[arg(long, value_parser = crate::infra::parse_room_class)]
    pub(crate) class: RoomClass,
    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) check_in: NaiveDate,
    /// Check-out date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) check_out: NaiveDate,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Check-in date for the walkthrough (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) check_in: Option<NaiveDate>,
    /// Stay length in nights
    #[arg(long, default_value_t = 3)]
    pub(crate) nights: u32,
    /// Seed the room inventory from a CSV export instead of the built-in layout
    #[arg(long)]
    pub(crate) rooms: Option<PathBuf>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let QuoteArgs {
        class,
        check_in,
        check_out,
    } = args;

    let front_desk = FrontDeskService::new(BillingCalculator::default());
    let quote = front_desk.quote(class, check_in, check_out)?;

    println!("Stay quote");
    println!("- class: {}", quote.class.label());
    println!(
        "- dates: {} to {} ({} nights)",
        quote.check_in, quote.check_out, quote.nights
    );
    println!("- nightly rate: {:.2}", quote.nightly_rate);
    println!("- total: {:.2}", quote.total_charge);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        check_in,
        nights,
        rooms,
    } = args;

    let check_in = check_in.unwrap_or_else(|| Local::now().date_naive());
    let check_out = check_in + Duration::days(i64::from(nights));

    let inventory = seed_rooms(rooms.as_deref())?;
    let billing = BillingCalculator::default();
    let front_desk = FrontDeskService::with_rooms(billing.clone(), inventory)?;

    println!("Front-desk walkthrough");
    println!("\nNightly rates");
    for class in RoomClass::ordered() {
        println!("- {}: {:.2}", class.label(), billing.nightly_rate(class));
    }

    println!("\nRegistered rooms");
    for room in front_desk.rooms() {
        println!("- room {} ({})", room.room_number, room.class.label());
    }

    println!("\nBooking three standard-room requests for {check_in} to {check_out}");
    let alice = front_desk.book(guest_request(
        "Alice Bennett",
        "555-0101",
        RoomClass::Standard,
        check_in,
        check_out,
    ))?;
    print_receipt(&alice);
    let bruno = front_desk.book(guest_request(
        "Bruno Costa",
        "555-0102",
        RoomClass::Standard,
        check_in,
        check_out,
    ))?;
    print_receipt(&bruno);

    match front_desk.book(guest_request(
        "Carla Duarte",
        "555-0103",
        RoomClass::Standard,
        check_in,
        check_out,
    )) {
        Ok(receipt) => print_receipt(&receipt),
        Err(err) => println!("- rejected: {err}"),
    }

    println!("\nRebooking Carla from the turnover day");
    let carla = front_desk.book(guest_request(
        "Carla Duarte",
        "555-0103",
        RoomClass::Standard,
        check_out,
        check_out + Duration::days(2),
    ))?;
    print_receipt(&carla);

    println!("\nQuoting a suite for the original dates");
    let quote = front_desk.quote(RoomClass::Suite, check_in, check_out)?;
    println!(
        "- {} nights at {:.2} per night: {:.2} total",
        quote.nights, quote.nightly_rate, quote.total_charge
    );

    println!("\nMoving Alice's stay to start after Carla's check-out");
    let shift = Duration::days(i64::from(nights) + 2);
    let moved = front_desk.modify(&alice.reservation_id, check_in + shift, check_out + shift)?;
    print_receipt(&moved);

    println!("\nActive reservations");
    for receipt in front_desk.list_reservations() {
        print_receipt(&receipt);
    }

    println!("\nCancelling Bruno's reservation");
    let cancelled = front_desk.cancel(&bruno.reservation_id)?;
    println!(
        "- released room {} for {} to {}",
        cancelled.room_number, cancelled.check_in, cancelled.check_out
    );

    println!("\nChecking out ALICE BENNETT (name matching ignores case)");
    let bill = front_desk.checkout("ALICE BENNETT")?;
    println!("- final bill for {}: {:.2}", bill.guest_name, bill.total_charge);

    let availability = front_desk.availability(RoomClass::Standard, check_in, check_out)?;
    println!(
        "\nStandard rooms free again for {check_in} to {check_out}: {:?}",
        availability
            .free_rooms
            .iter()
            .map(|room| room.0)
            .collect::<Vec<_>>()
    );
    println!(
        "Remaining reservations: {}",
        front_desk.list_reservations().len()
    );

    Ok(())
}

fn guest_request(
    name: &str,
    phone: &str,
    class: RoomClass,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> BookingRequest {
    BookingRequest {
        guest_name: name.to_string(),
        guest_phone: phone.to_string(),
        class,
        check_in,
        check_out,
    }
}

fn print_receipt(receipt: &ReservationReceipt) {
    println!(
        "- {} | {} | room {} ({}) | {} to {} | {} nights | total {:.2}",
        receipt.reservation_id,
        receipt.guest_name,
        receipt.room_number,
        receipt.class.label(),
        receipt.check_in,
        receipt.check_out,
        receipt.nights,
        receipt.total_charge
    );
}
