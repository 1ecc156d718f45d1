//! Default NSE screening universe.
//!
//! A broad slice of the Nifty 500 rather than just the familiar
//! large-cap brands, so the screener surfaces actual 52-week leaders.
//! Order carries no meaning; it is not a ranking.

pub const NSE_UNIVERSE: &[&str] = &[
    // Large caps
    "RELIANCE.NS", "TCS.NS", "HDFCBANK.NS", "INFY.NS", "HINDUNILVR.NS",
    "ICICIBANK.NS", "ITC.NS", "SBIN.NS", "BHARTIARTL.NS", "KOTAKBANK.NS",
    "LT.NS", "ASIANPAINT.NS", "MARUTI.NS", "TITAN.NS", "AXISBANK.NS",
    // Mid caps
    "ADANIENT.NS", "ADANIPORTS.NS", "BAJAJFINSV.NS", "BAJFINANCE.NS",
    "HCLTECH.NS", "SUNPHARMA.NS", "WIPRO.NS", "ULTRACEMCO.NS",
    "TATASTEEL.NS", "POWERGRID.NS", "NTPC.NS", "ONGC.NS",
    "INDUSINDBK.NS", "TECHM.NS", "TATAMOTORS.NS", "M&M.NS",
    // Industrials and power
    "TATAPOWER.NS", "VEDL.NS", "HINDALCO.NS", "COALINDIA.NS",
    "IOC.NS", "BPCL.NS", "GAIL.NS", "ADANIGREEN.NS",
    "PIDILITIND.NS", "HAVELLS.NS", "SIEMENS.NS", "ABB.NS",
    "BAJAJ-AUTO.NS", "HEROMOTOCO.NS", "EICHERMOT.NS",
    // Consumer and retail
    "TATACONSUM.NS", "NESTLEIND.NS", "BRITANNIA.NS", "DABUR.NS",
    "GODREJCP.NS", "MARICO.NS", "COLPAL.NS", "TATAELXSI.NS",
    // IT services
    "LTI.NS", "MPHASIS.NS", "PERSISTENT.NS", "COFORGE.NS",
    "LTTS.NS", "OFSS.NS", "MINDTREE.NS",
    // Pharma
    "DRREDDY.NS", "CIPLA.NS", "BIOCON.NS", "DIVISLAB.NS",
    "AUROPHARMA.NS", "LUPIN.NS", "TORNTPHARM.NS",
    // Banking and financial services
    "BANDHANBNK.NS", "FEDERALBNK.NS", "IDFCFIRSTB.NS",
    "LICHSGFIN.NS", "MUTHOOTFIN.NS", "SBICARD.NS",
    // Real estate
    "DLF.NS", "GODREJPROP.NS", "OBEROIRLTY.NS",
    "PHOENIXLTD.NS", "PRESTIGE.NS",
    // Auto components
    "BOSCHLTD.NS", "MOTHERSUMI.NS", "BALKRISIND.NS",
    "APOLLOTYRE.NS", "MRF.NS", "EXIDEIND.NS",
    // Chemicals
    "UPL.NS", "ATUL.NS", "DEEPAKNTR.NS", "SRF.NS", "TATACHEM.NS",
    // Metals and mining
    "TORNTPOWER.NS", "JSW.NS", "SAIL.NS", "NMDC.NS",
    // Newer listings
    "IRCTC.NS", "ZOMATO.NS", "NYKAA.NS", "PAYTM.NS",
    "POLICYBZR.NS", "DELHIVERY.NS",
];
